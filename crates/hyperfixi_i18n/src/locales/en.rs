//! English.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "en",
    name: "English",
    word_order: WordOrder::Svo,
    direction: Direction::Ltr,
    segmentation: Segmentation::Whitespace,
    keywords: &[
        (Commands, "toggle", &["toggle"]),
        (Commands, "add", &["add"]),
        (Commands, "remove", &["remove"]),
        (Commands, "show", &["show"]),
        (Commands, "hide", &["hide"]),
        (Commands, "set", &["set"]),
        (Commands, "put", &["put"]),
        (Commands, "increment", &["increment"]),
        (Commands, "decrement", &["decrement"]),
        (Commands, "log", &["log"]),
        (Commands, "send", &["send"]),
        (Commands, "trigger", &["trigger"]),
        (Commands, "wait", &["wait"]),
        (Commands, "fetch", &["fetch"]),
        (Commands, "go", &["go"]),
        (Commands, "call", &["call"]),
        (Commands, "focus", &["focus"]),
        (Commands, "blur", &["blur"]),
        (Commands, "halt", &["halt"]),
        (Commands, "exit", &["exit"]),
        (Commands, "return", &["return"]),
        (Commands, "append", &["append"]),
        (Commands, "take", &["take"]),
        (Logical, "if", &["if"]),
        (Logical, "unless", &["unless"]),
        (Logical, "else", &["else", "otherwise"]),
        (Logical, "end", &["end"]),
        (Logical, "then", &["then"]),
        (Logical, "and", &["and"]),
        (Logical, "or", &["or"]),
        (Logical, "not", &["not"]),
        (Logical, "is", &["is"]),
        (Logical, "repeat", &["repeat"]),
        (Logical, "times", &["times"]),
        (Logical, "while", &["while"]),
        (Logical, "for", &["for"]),
        (Logical, "in", &["in"]),
        (Logical, "forever", &["forever"]),
        (Logical, "each", &["each", "every"]),
        (Events, "click", &["click"]),
        (Events, "dblclick", &["dblclick"]),
        (Events, "submit", &["submit"]),
        (Events, "input", &["input"]),
        (Events, "change", &["change"]),
        (Events, "keydown", &["keydown"]),
        (Events, "keyup", &["keyup"]),
        (Events, "mouseover", &["mouseover"]),
        (Events, "mouseout", &["mouseout"]),
        (Events, "load", &["load"]),
        (Events, "scroll", &["scroll"]),
        (Values, "me", &["me", "my", "I"]),
        (Values, "it", &["it", "its"]),
        (Values, "you", &["you", "your"]),
        (Values, "result", &["result"]),
        (Values, "event", &["event"]),
        (Values, "target", &["target"]),
        (Values, "body", &["body"]),
        (Values, "true", &["true"]),
        (Values, "false", &["false"]),
        (Values, "null", &["null"]),
        (Temporal, "until", &["until"]),
        (Modifiers, "on", &["on"]),
        (Modifiers, "to", &["to"]),
        (Modifiers, "from", &["from"]),
        (Modifiers, "into", &["into"]),
        (Modifiers, "by", &["by"]),
        (Modifiers, "as", &["as"]),
        (Modifiers, "with", &["with"]),
        (Modifiers, "at", &["at"]),
        (Modifiers, "of", &["of"]),
        (Attributes, "once", &["once"]),
        (Attributes, "prevent", &["prevent"]),
        (Attributes, "stop", &["stop"]),
        (Attributes, "passive", &["passive"]),
        (Attributes, "capture", &["capture"]),
        (Attributes, "debounce", &["debounce", "debounced"]),
        (Attributes, "throttle", &["throttle", "throttled"]),
    ],
    markers: &[
        ("destination", "to", &["on", "into", "at"]),
        ("source", "from", &[]),
        ("quantity", "by", &[]),
        ("responseType", "as", &[]),
    ],
    event_marker: ("on", &[]),
    source_marker: ("from", &[]),
    time_units: &[
        ("milliseconds", DurationUnit::Ms),
        ("millisecond", DurationUnit::Ms),
        ("seconds", DurationUnit::S),
        ("second", DurationUnit::S),
        ("sec", DurationUnit::S),
        ("minutes", DurationUnit::M),
        ("minute", DurationUnit::M),
        ("min", DurationUnit::M),
        ("hours", DurationUnit::H),
        ("hour", DurationUnit::H),
    ],
    suffix_particles: &[],
    apostrophe_suffixes: false,
    normalizer: None,
};
