//! Italian.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation, italian};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "it",
    name: "Italian",
    word_order: WordOrder::Svo,
    direction: Direction::Ltr,
    segmentation: Segmentation::Whitespace,
    keywords: &[
        (Commands, "toggle", &["alternare", "alterna", "commuta"]),
        (Commands, "add", &["aggiungere", "aggiungi"]),
        (Commands, "remove", &["rimuovere", "rimuovi", "togli"]),
        (Commands, "show", &["mostrare", "mostra"]),
        (Commands, "hide", &["nascondere", "nascondi"]),
        (Commands, "set", &["impostare", "imposta"]),
        (Commands, "put", &["mettere", "metti", "inserisci"]),
        (Commands, "increment", &["incrementare", "incrementa"]),
        (Commands, "decrement", &["decrementare", "decrementa"]),
        (Commands, "log", &["registrare", "registra", "stampa"]),
        (Commands, "send", &["inviare", "invia"]),
        (Commands, "trigger", &["scatenare", "scatena"]),
        (Commands, "wait", &["aspettare", "aspetta", "attendi"]),
        (Commands, "fetch", &["recuperare", "recupera"]),
        (Commands, "go", &["andare", "vai"]),
        (Commands, "call", &["chiamare", "chiama"]),
        (Commands, "focus", &["focalizzare", "focalizza"]),
        (Commands, "blur", &["sfocare", "sfoca"]),
        (Commands, "halt", &["fermare", "ferma"]),
        (Commands, "exit", &["uscire", "esci"]),
        (Commands, "return", &["ritornare", "ritorna", "restituisci"]),
        (Commands, "append", &["accodare", "accoda"]),
        (Commands, "take", &["prendere", "prendi"]),
        (Logical, "if", &["se"]),
        (Logical, "unless", &["a meno che"]),
        (Logical, "else", &["altrimenti"]),
        (Logical, "end", &["fine"]),
        (Logical, "then", &["poi", "allora"]),
        (Logical, "and", &["e"]),
        (Logical, "or", &["o"]),
        (Logical, "not", &["non"]),
        (Logical, "is", &["è"]),
        (Logical, "repeat", &["ripetere", "ripeti"]),
        (Logical, "times", &["volte"]),
        (Logical, "while", &["mentre"]),
        (Logical, "for", &["per"]),
        (Logical, "in", &["in"]),
        (Logical, "forever", &["sempre"]),
        (Logical, "each", &["ogni"]),
        (Events, "click", &["clic"]),
        (Events, "dblclick", &["doppio clic"]),
        (Events, "submit", &["invio"]),
        (Events, "change", &["cambio"]),
        (Events, "keydown", &["tasto"]),
        (Events, "load", &["caricamento"]),
        (Events, "scroll", &["scorrimento"]),
        (Values, "me", &["io", "me"]),
        (Values, "it", &["esso", "ciò"]),
        (Values, "you", &["tu"]),
        (Values, "result", &["risultato"]),
        (Values, "event", &["evento"]),
        (Values, "target", &["bersaglio"]),
        (Values, "body", &["corpo"]),
        (Values, "true", &["vero"]),
        (Values, "false", &["falso"]),
        (Values, "null", &["nullo"]),
        (Temporal, "until", &["fino a", "finché"]),
        (Modifiers, "on", &["su", "al"]),
        (Modifiers, "to", &["a"]),
        (Modifiers, "into", &["in", "dentro"]),
        (Modifiers, "from", &["da"]),
        (Modifiers, "by", &["di"]),
        (Modifiers, "as", &["come"]),
        (Modifiers, "with", &["con"]),
        (Attributes, "once", &["una volta"]),
        (Attributes, "prevent", &["previeni"]),
        (Attributes, "passive", &["passivo"]),
        (Attributes, "capture", &["cattura"]),
        (Attributes, "debounce", &["rimbalzo"]),
        (Attributes, "throttle", &["limita"]),
    ],
    markers: &[
        ("destination", "su", &["a", "in"]),
        ("source", "da", &[]),
        ("quantity", "di", &[]),
        ("responseType", "come", &[]),
    ],
    event_marker: ("al", &["su"]),
    source_marker: ("da", &[]),
    time_units: &[
        ("millisecondi", DurationUnit::Ms),
        ("secondi", DurationUnit::S),
        ("secondo", DurationUnit::S),
        ("minuti", DurationUnit::M),
        ("minuto", DurationUnit::M),
        ("ore", DurationUnit::H),
        ("ora", DurationUnit::H),
    ],
    suffix_particles: &[],
    apostrophe_suffixes: false,
    normalizer: Some(italian),
};
