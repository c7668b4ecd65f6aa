//! Spanish.

use hyperfixi_foundation::DurationUnit;

use super::{LocaleData, Segmentation, spanish};
use crate::keywords::KeywordCategory::{
    Attributes, Commands, Events, Logical, Modifiers, Temporal, Values,
};
use crate::profile::{Direction, WordOrder};

pub(super) static LOCALE: LocaleData = LocaleData {
    code: "es",
    name: "Spanish",
    word_order: WordOrder::Svo,
    direction: Direction::Ltr,
    segmentation: Segmentation::Whitespace,
    keywords: &[
        (Commands, "toggle", &["alternar", "alterna", "conmutar"]),
        (Commands, "add", &["añadir", "añade", "agregar", "agrega"]),
        (Commands, "remove", &["quitar", "quita", "eliminar", "elimina"]),
        (Commands, "show", &["mostrar", "muestra"]),
        (Commands, "hide", &["ocultar", "oculta", "esconder"]),
        (Commands, "set", &["establecer", "establece", "asignar"]),
        (Commands, "put", &["poner", "pon", "colocar", "coloca"]),
        (Commands, "increment", &["incrementar", "incrementa", "aumentar"]),
        (Commands, "decrement", &["decrementar", "decrementa", "disminuir"]),
        (Commands, "log", &["registrar", "registra", "imprimir"]),
        (Commands, "send", &["enviar", "envía", "envia"]),
        (Commands, "trigger", &["disparar", "dispara", "activar"]),
        (Commands, "wait", &["esperar", "espera"]),
        (Commands, "fetch", &["obtener", "obtén", "traer"]),
        (Commands, "go", &["ir", "ve", "navegar"]),
        (Commands, "call", &["llamar", "llama"]),
        (Commands, "focus", &["enfocar", "enfoca"]),
        (Commands, "blur", &["desenfocar", "desenfoca"]),
        (Commands, "halt", &["detener", "detén", "parar"]),
        (Commands, "exit", &["salir", "sal"]),
        (Commands, "return", &["devolver", "devuelve", "retornar"]),
        (Commands, "append", &["anexar", "anexa", "adjuntar"]),
        (Commands, "take", &["tomar", "toma"]),
        (Logical, "if", &["si"]),
        (Logical, "unless", &["a menos que"]),
        (Logical, "else", &["sino", "si no", "de lo contrario"]),
        (Logical, "end", &["fin"]),
        (Logical, "then", &["entonces", "luego"]),
        (Logical, "and", &["y"]),
        (Logical, "or", &["o"]),
        (Logical, "not", &["no"]),
        (Logical, "is", &["es"]),
        (Logical, "repeat", &["repetir", "repite"]),
        (Logical, "times", &["veces"]),
        (Logical, "while", &["mientras"]),
        (Logical, "for", &["para", "por cada"]),
        (Logical, "forever", &["siempre"]),
        (Logical, "each", &["cada"]),
        (Events, "click", &["clic"]),
        (Events, "dblclick", &["doble clic"]),
        (Events, "submit", &["envío"]),
        (Events, "input", &["entrada"]),
        (Events, "change", &["cambio"]),
        (Events, "keydown", &["tecla"]),
        (Events, "load", &["carga"]),
        (Events, "scroll", &["desplazamiento"]),
        (Values, "me", &["yo", "mi", "mí"]),
        (Values, "it", &["ello", "eso"]),
        (Values, "you", &["tú"]),
        (Values, "result", &["resultado"]),
        (Values, "event", &["evento"]),
        (Values, "target", &["objetivo"]),
        (Values, "body", &["cuerpo"]),
        (Values, "true", &["verdadero"]),
        (Values, "false", &["falso"]),
        (Values, "null", &["nulo"]),
        (Temporal, "until", &["hasta", "hasta que"]),
        (Modifiers, "on", &["en", "al", "sobre"]),
        (Modifiers, "to", &["a"]),
        (Modifiers, "from", &["de", "desde"]),
        (Modifiers, "into", &["dentro de"]),
        (Modifiers, "by", &["por"]),
        (Modifiers, "as", &["como"]),
        (Modifiers, "with", &["con"]),
        (Attributes, "once", &["una vez"]),
        (Attributes, "prevent", &["prevenir"]),
        (Attributes, "passive", &["pasivo"]),
        (Attributes, "capture", &["captura"]),
        (Attributes, "debounce", &["rebote"]),
        (Attributes, "throttle", &["limitar"]),
    ],
    markers: &[
        ("destination", "en", &["a", "dentro de", "sobre"]),
        ("source", "de", &["desde"]),
        ("quantity", "por", &[]),
        ("responseType", "como", &[]),
    ],
    event_marker: ("en", &["al", "cuando"]),
    source_marker: ("desde", &["de"]),
    time_units: &[
        ("milisegundos", DurationUnit::Ms),
        ("segundos", DurationUnit::S),
        ("segundo", DurationUnit::S),
        ("seg", DurationUnit::S),
        ("minutos", DurationUnit::M),
        ("minuto", DurationUnit::M),
        ("horas", DurationUnit::H),
        ("hora", DurationUnit::H),
    ],
    suffix_particles: &[],
    apostrophe_suffixes: false,
    normalizer: Some(spanish),
};
