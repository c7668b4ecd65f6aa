//! Korean.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation, korean};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "ko",
    name: "Korean",
    word_order: WordOrder::Sov,
    direction: Direction::Ltr,
    segmentation: Segmentation::Whitespace,
    keywords: &[
        (Commands, "toggle", &["토글", "전환"]),
        (Commands, "add", &["추가"]),
        (Commands, "remove", &["제거", "삭제"]),
        (Commands, "show", &["표시", "보이기"]),
        (Commands, "hide", &["숨기기", "숨김"]),
        (Commands, "set", &["설정"]),
        (Commands, "put", &["넣기"]),
        (Commands, "increment", &["증가"]),
        (Commands, "decrement", &["감소"]),
        (Commands, "log", &["기록", "로그"]),
        (Commands, "send", &["보내기", "전송"]),
        (Commands, "trigger", &["발생", "트리거"]),
        (Commands, "wait", &["대기", "기다리기"]),
        (Commands, "fetch", &["가져오기"]),
        (Commands, "go", &["이동"]),
        (Commands, "call", &["호출"]),
        (Commands, "focus", &["포커스"]),
        (Commands, "blur", &["블러"]),
        (Commands, "halt", &["중지", "정지"]),
        (Commands, "exit", &["종료"]),
        (Commands, "return", &["반환"]),
        (Commands, "append", &["덧붙이기"]),
        (Commands, "take", &["가져가기"]),
        (Logical, "if", &["만약"]),
        (Logical, "unless", &["아니라면"]),
        (Logical, "else", &["아니면"]),
        (Logical, "end", &["끝"]),
        (Logical, "then", &["그다음", "그러면"]),
        (Logical, "and", &["그리고"]),
        (Logical, "or", &["또는"]),
        (Logical, "not", &["아닌"]),
        (Logical, "is", &["이다"]),
        (Logical, "repeat", &["반복"]),
        (Logical, "times", &["번", "회"]),
        (Logical, "while", &["동안"]),
        (Logical, "for", &["각각"]),
        (Logical, "in", &["안에"]),
        (Logical, "forever", &["영원히"]),
        (Logical, "each", &["각"]),
        (Events, "click", &["클릭"]),
        (Events, "dblclick", &["더블클릭"]),
        (Events, "submit", &["제출"]),
        (Events, "input", &["입력"]),
        (Events, "change", &["변경"]),
        (Events, "keydown", &["키다운"]),
        (Events, "keyup", &["키업"]),
        (Events, "load", &["로드"]),
        (Events, "scroll", &["스크롤"]),
        (Values, "me", &["나", "내"]),
        (Values, "it", &["그것"]),
        (Values, "you", &["너"]),
        (Values, "result", &["결과"]),
        (Values, "event", &["이벤트"]),
        (Values, "target", &["대상"]),
        (Values, "body", &["본문"]),
        (Values, "true", &["참"]),
        (Values, "false", &["거짓"]),
        (Values, "null", &["널"]),
        (Temporal, "until", &["까지"]),
        (Modifiers, "object", &["를", "을"]),
        (Modifiers, "to", &["에", "에게", "로", "으로"]),
        (Modifiers, "from", &["에서", "부터"]),
        (Modifiers, "with", &["와", "과"]),
        (Modifiers, "of", &["의"]),
        (Modifiers, "topic", &["은", "는"]),
        (Modifiers, "subject", &["이", "가"]),
        (Modifiers, "by", &["만큼"]),
        (Modifiers, "as", &["로서"]),
        (Modifiers, "on", &["시", "때"]),
        (Attributes, "once", &["한번"]),
        (Attributes, "prevent", &["방지"]),
        (Attributes, "debounce", &["디바운스"]),
        (Attributes, "throttle", &["스로틀"]),
    ],
    markers: &[
        ("patient", "를", &["을"]),
        ("destination", "에", &["에게", "로", "으로"]),
        ("source", "에서", &["부터"]),
        ("quantity", "만큼", &[]),
        ("responseType", "로서", &[]),
    ],
    event_marker: ("시", &["때", "에"]),
    source_marker: ("에서", &[]),
    time_units: &[
        ("밀리초", DurationUnit::Ms),
        ("초", DurationUnit::S),
        ("분", DurationUnit::M),
        ("시간", DurationUnit::H),
    ],
    suffix_particles: &[
        "에서", "에게", "으로", "부터", "만큼", "로서", "까지", "을", "를", "에", "로", "의",
        "시", "때",
    ],
    apostrophe_suffixes: false,
    normalizer: Some(korean),
};
