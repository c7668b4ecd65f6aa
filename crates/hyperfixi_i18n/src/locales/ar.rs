//! Arabic.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation, arabic};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "ar",
    name: "Arabic",
    word_order: WordOrder::Vso,
    direction: Direction::Rtl,
    segmentation: Segmentation::Whitespace,
    keywords: &[
        (Commands, "toggle", &["بدل", "بدّل", "تبديل"]),
        (Commands, "add", &["أضف", "اضف", "إضافة"]),
        (Commands, "remove", &["احذف", "أزل", "إزالة"]),
        (Commands, "show", &["أظهر", "اظهر", "عرض"]),
        (Commands, "hide", &["أخف", "اخف", "إخفاء"]),
        (Commands, "set", &["عين", "اضبط"]),
        (Commands, "put", &["ضع"]),
        (Commands, "increment", &["زد", "زيادة"]),
        (Commands, "decrement", &["أنقص", "انقص"]),
        (Commands, "log", &["سجل"]),
        (Commands, "send", &["أرسل", "ارسل"]),
        (Commands, "trigger", &["أطلق", "اطلق"]),
        (Commands, "wait", &["انتظر"]),
        (Commands, "fetch", &["اجلب", "جلب"]),
        (Commands, "go", &["اذهب", "انتقل"]),
        (Commands, "call", &["استدع", "استدعاء"]),
        (Commands, "focus", &["ركز"]),
        (Commands, "blur", &["شوش"]),
        (Commands, "halt", &["أوقف", "اوقف"]),
        (Commands, "exit", &["اخرج"]),
        (Commands, "return", &["أرجع", "ارجع"]),
        (Commands, "append", &["ألحق", "الحق"]),
        (Commands, "take", &["خذ"]),
        (Logical, "if", &["إذا", "اذا"]),
        (Logical, "unless", &["إلا إذا", "الا اذا"]),
        (Logical, "else", &["وإلا", "والا"]),
        (Logical, "end", &["نهاية", "انتهى"]),
        (Logical, "then", &["ثم"]),
        (Logical, "and", &["و"]),
        (Logical, "or", &["أو", "او"]),
        (Logical, "not", &["ليس"]),
        (Logical, "is", &["يساوي"]),
        (Logical, "repeat", &["كرر"]),
        (Logical, "times", &["مرات", "مرة"]),
        (Logical, "while", &["بينما"]),
        (Logical, "for", &["لكل"]),
        (Logical, "forever", &["دائما"]),
        (Logical, "each", &["كل"]),
        (Events, "click", &["نقر", "النقر"]),
        (Events, "dblclick", &["نقر مزدوج"]),
        (Events, "submit", &["إرسال"]),
        (Events, "input", &["إدخال"]),
        (Events, "change", &["تغيير"]),
        (Events, "load", &["تحميل"]),
        (Events, "scroll", &["تمرير"]),
        (Values, "me", &["أنا", "انا"]),
        (Values, "it", &["ذلك", "هو"]),
        (Values, "you", &["أنت", "انت"]),
        (Values, "result", &["النتيجة", "نتيجة"]),
        (Values, "event", &["الحدث", "حدث"]),
        (Values, "target", &["الهدف", "هدف"]),
        (Values, "body", &["الجسم"]),
        (Values, "true", &["صحيح"]),
        (Values, "false", &["خطأ"]),
        (Values, "null", &["فارغ"]),
        (Temporal, "until", &["حتى"]),
        (Modifiers, "on", &["على", "عند"]),
        (Modifiers, "to", &["إلى", "الى"]),
        (Modifiers, "from", &["من"]),
        (Modifiers, "into", &["في"]),
        (Modifiers, "by", &["بمقدار"]),
        (Modifiers, "as", &["بصفة"]),
        (Modifiers, "with", &["مع"]),
        (Attributes, "once", &["مرة واحدة"]),
        (Attributes, "prevent", &["امنع"]),
        (Attributes, "debounce", &["تأخير"]),
        (Attributes, "throttle", &["تقييد"]),
    ],
    markers: &[
        ("destination", "على", &["إلى", "الى", "في"]),
        ("source", "من", &[]),
        ("quantity", "بمقدار", &[]),
        ("responseType", "بصفة", &[]),
    ],
    event_marker: ("عند", &["على"]),
    source_marker: ("من", &[]),
    time_units: &[
        ("ثانية", DurationUnit::S),
        ("ثوان", DurationUnit::S),
        ("دقيقة", DurationUnit::M),
        ("ساعة", DurationUnit::H),
    ],
    suffix_particles: &[],
    apostrophe_suffixes: false,
    normalizer: Some(arabic),
};
