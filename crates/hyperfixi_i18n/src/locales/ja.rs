//! Japanese.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation, japanese};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "ja",
    name: "Japanese",
    word_order: WordOrder::Sov,
    direction: Direction::Ltr,
    segmentation: Segmentation::Unspaced,
    keywords: &[
        (Commands, "toggle", &["切り替え", "切り替える", "トグル"]),
        (Commands, "add", &["追加"]),
        (Commands, "remove", &["削除", "取り除く"]),
        (Commands, "show", &["表示", "見せる"]),
        (Commands, "hide", &["隠す", "非表示"]),
        (Commands, "set", &["設定"]),
        (Commands, "put", &["入れる", "置く"]),
        (Commands, "increment", &["増加", "増やす"]),
        (Commands, "decrement", &["減少", "減らす"]),
        (Commands, "log", &["記録", "ログ"]),
        (Commands, "send", &["送る"]),
        (Commands, "trigger", &["発火", "トリガー"]),
        (Commands, "wait", &["待つ", "待機"]),
        (Commands, "fetch", &["取得", "フェッチ"]),
        (Commands, "go", &["移動", "行く"]),
        (Commands, "call", &["呼び出す", "呼ぶ"]),
        (Commands, "focus", &["フォーカス"]),
        (Commands, "blur", &["ぼかす", "ブラー"]),
        (Commands, "halt", &["停止", "止める"]),
        (Commands, "exit", &["終了"]),
        (Commands, "return", &["戻す", "返す"]),
        (Commands, "append", &["追記"]),
        (Commands, "take", &["取る"]),
        (Logical, "if", &["もし"]),
        (Logical, "unless", &["でなければ"]),
        (Logical, "else", &["そうでなければ", "それ以外"]),
        (Logical, "end", &["終わり"]),
        (Logical, "then", &["それから", "次に", "なら"]),
        (Logical, "and", &["かつ"]),
        (Logical, "or", &["または"]),
        (Logical, "not", &["ない"]),
        (Logical, "is", &["である"]),
        (Logical, "repeat", &["繰り返し", "繰り返す"]),
        (Logical, "times", &["回"]),
        (Logical, "while", &["間", "の間"]),
        (Logical, "for", &["各"]),
        (Logical, "in", &["の中", "中"]),
        (Logical, "forever", &["永遠に"]),
        (Logical, "each", &["それぞれ"]),
        (Events, "click", &["クリック"]),
        (Events, "dblclick", &["ダブルクリック"]),
        (Events, "submit", &["送信"]),
        (Events, "input", &["入力"]),
        (Events, "change", &["変更"]),
        (Events, "keydown", &["キーダウン"]),
        (Events, "keyup", &["キーアップ"]),
        (Events, "mouseover", &["マウスオーバー"]),
        (Events, "mouseout", &["マウスアウト"]),
        (Events, "load", &["読み込み"]),
        (Events, "scroll", &["スクロール"]),
        (Values, "me", &["私", "自分"]),
        (Values, "it", &["それ"]),
        (Values, "you", &["あなた"]),
        (Values, "result", &["結果"]),
        (Values, "event", &["イベント"]),
        (Values, "target", &["ターゲット"]),
        (Values, "body", &["本体"]),
        (Values, "true", &["真"]),
        (Values, "false", &["偽"]),
        (Values, "null", &["ヌル"]),
        (Temporal, "until", &["まで"]),
        (Modifiers, "object", &["を"]),
        (Modifiers, "to", &["に", "へ"]),
        (Modifiers, "from", &["から"]),
        (Modifiers, "at", &["で"]),
        (Modifiers, "with", &["と"]),
        (Modifiers, "of", &["の"]),
        (Modifiers, "topic", &["は"]),
        (Modifiers, "subject", &["が"]),
        (Modifiers, "as", &["として"]),
        (Modifiers, "by", &["だけ", "ずつ"]),
        (Modifiers, "on", &["時"]),
        (Attributes, "once", &["一度"]),
        (Attributes, "prevent", &["防止"]),
        (Attributes, "debounce", &["デバウンス"]),
        (Attributes, "throttle", &["スロットル"]),
    ],
    markers: &[
        ("patient", "を", &[]),
        ("destination", "に", &["へ"]),
        ("source", "から", &[]),
        ("quantity", "だけ", &["ずつ"]),
        ("responseType", "として", &[]),
    ],
    event_marker: ("で", &["時", "に"]),
    source_marker: ("から", &[]),
    time_units: &[
        ("ミリ秒", DurationUnit::Ms),
        ("秒", DurationUnit::S),
        ("分", DurationUnit::M),
        ("時間", DurationUnit::H),
    ],
    suffix_particles: &[],
    apostrophe_suffixes: false,
    normalizer: Some(japanese),
};
