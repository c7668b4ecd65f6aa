//! Turkish.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation, turkish};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "tr",
    name: "Turkish",
    word_order: WordOrder::Sov,
    direction: Direction::Ltr,
    segmentation: Segmentation::Whitespace,
    keywords: &[
        (Commands, "toggle", &["değiştir", "geçiş"]),
        (Commands, "add", &["ekle"]),
        (Commands, "remove", &["kaldır", "sil"]),
        (Commands, "show", &["göster"]),
        (Commands, "hide", &["gizle"]),
        (Commands, "set", &["ayarla", "belirle"]),
        (Commands, "put", &["koy", "yerleştir"]),
        (Commands, "increment", &["artır", "arttır"]),
        (Commands, "decrement", &["azalt"]),
        (Commands, "log", &["kaydet", "yazdır"]),
        (Commands, "send", &["gönder"]),
        (Commands, "trigger", &["tetikle"]),
        (Commands, "wait", &["bekle"]),
        (Commands, "fetch", &["getir"]),
        (Commands, "go", &["git"]),
        (Commands, "call", &["çağır"]),
        (Commands, "focus", &["odakla"]),
        (Commands, "blur", &["bulanıklaştır"]),
        (Commands, "halt", &["durdur"]),
        (Commands, "exit", &["çık"]),
        (Commands, "return", &["döndür"]),
        (Commands, "append", &["iliştir"]),
        (Commands, "take", &["al"]),
        (Logical, "if", &["eğer"]),
        (Logical, "unless", &["değilse"]),
        (Logical, "else", &["yoksa", "aksi halde"]),
        (Logical, "end", &["son"]),
        (Logical, "then", &["sonra", "ardından"]),
        (Logical, "and", &["ve"]),
        (Logical, "or", &["veya"]),
        (Logical, "not", &["değil"]),
        (Logical, "is", &["eşittir"]),
        (Logical, "repeat", &["tekrarla"]),
        (Logical, "times", &["kez", "kere", "defa"]),
        (Logical, "while", &["iken"]),
        (Logical, "for", &["her"]),
        (Logical, "in", &["içinde"]),
        (Logical, "forever", &["sonsuza"]),
        (Logical, "each", &["her biri"]),
        (Events, "click", &["tıkla", "tıklama"]),
        (Events, "dblclick", &["çift tıklama"]),
        (Events, "submit", &["gönderim"]),
        (Events, "input", &["giriş"]),
        (Events, "change", &["değişim"]),
        (Events, "keydown", &["tuş"]),
        (Events, "load", &["yükleme"]),
        (Events, "scroll", &["kaydırma"]),
        (Values, "me", &["ben", "beni"]),
        (Values, "it", &["o", "onu"]),
        (Values, "you", &["sen"]),
        (Values, "result", &["sonuç"]),
        (Values, "event", &["olay"]),
        (Values, "target", &["hedef"]),
        (Values, "body", &["gövde"]),
        (Values, "true", &["doğru"]),
        (Values, "false", &["yanlış"]),
        (Values, "null", &["boş"]),
        (Temporal, "until", &["kadar"]),
        (Modifiers, "object", &["'i", "'ı", "'u", "'ü", "'yi", "'yı", "'yu", "'yü"]),
        (Modifiers, "to", &["'e", "'a", "'ye", "'ya"]),
        (Modifiers, "at", &["'de", "'da", "'te", "'ta"]),
        (Modifiers, "from", &["'den", "'dan", "'ten", "'tan"]),
        (Modifiers, "on", &["üzerine", "olunca"]),
        (Modifiers, "as", &["olarak"]),
        (Modifiers, "with", &["ile"]),
        (Attributes, "once", &["bir kez"]),
        (Attributes, "prevent", &["engelle"]),
        (Attributes, "debounce", &["geciktir"]),
        (Attributes, "throttle", &["sınırla"]),
    ],
    markers: &[
        ("patient", "'i", &["'ı", "'u", "'ü", "'yi", "'yı", "'yu", "'yü"]),
        ("destination", "'e", &["'a", "'ye", "'ya", "'de", "'da"]),
        ("source", "'den", &["'dan", "'ten", "'tan"]),
        ("quantity", "kadar", &[]),
        ("responseType", "olarak", &[]),
    ],
    event_marker: ("üzerine", &["olunca"]),
    source_marker: ("'den", &["'dan", "'ten", "'tan"]),
    time_units: &[
        ("saniye", DurationUnit::S),
        ("sn", DurationUnit::S),
        ("dakika", DurationUnit::M),
        ("dk", DurationUnit::M),
        ("saat", DurationUnit::H),
    ],
    suffix_particles: &[],
    apostrophe_suffixes: true,
    normalizer: Some(turkish),
};
