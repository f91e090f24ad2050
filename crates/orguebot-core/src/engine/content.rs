// ── OrgueBot Engine: Content Provider ─────────────────────────────────────────
//
// The engine owns none of the text it speaks. Response pools, greetings,
// farewells, fallback lines, help text and trivia come from a
// `ContentProvider`; the engine only picks uniformly at random from whatever
// pool it is handed.
//
// `SpanishOrganContent` is the built-in knowledge pack about the pipe organ.

use crate::atoms::types::Topic;
use rand::seq::SliceRandom;
use rand::Rng;

pub trait ContentProvider {
    /// Candidate answers for a classified topic.
    fn responses(&self, topic: Topic) -> &[&str];
    fn greetings(&self) -> &[&str];
    fn farewells(&self) -> &[&str];
    /// Answers used when no topic clears the threshold.
    fn no_info(&self) -> &[&str];
    fn trivia(&self) -> &[&str];
    fn help(&self) -> &str;
    fn suggestions_header(&self) -> &str;
    fn fun_mode_on(&self) -> &str;
    fn fun_mode_off(&self) -> &str;

    /// Framing for the every-Nth-question milestone.
    fn milestone(&self, count: u32, trivia: &str) -> String {
        format!("¡Pregunta número {count}! Para celebrarlo, aquí tienes un dato curioso: {trivia}")
    }
}

/// Uniform pick from a pool; an empty pool yields an empty string.
pub fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or("")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishOrganContent;

impl ContentProvider for SpanishOrganContent {
    fn responses(&self, topic: Topic) -> &[&str] {
        match topic {
            Topic::History => HISTORY,
            Topic::Composers => COMPOSERS,
            Topic::Structure => STRUCTURE,
            Topic::Technique => TECHNIQUE,
            Topic::FamousOrgans => FAMOUS_ORGANS,
            Topic::LiturgicalMusic => LITURGICAL_MUSIC,
            Topic::Maintenance => MAINTENANCE,
            Topic::Trivia => TRIVIA_TOPIC,
        }
    }

    fn greetings(&self) -> &[&str] {
        GREETINGS
    }

    fn farewells(&self) -> &[&str] {
        FAREWELLS
    }

    fn no_info(&self) -> &[&str] {
        NO_INFO
    }

    fn trivia(&self) -> &[&str] {
        TRIVIA
    }

    fn help(&self) -> &str {
        HELP
    }

    fn suggestions_header(&self) -> &str {
        SUGGESTIONS_HEADER
    }

    fn fun_mode_on(&self) -> &str {
        FUN_MODE_ON
    }

    fn fun_mode_off(&self) -> &str {
        FUN_MODE_OFF
    }
}

// ── Knowledge pack ─────────────────────────────────────────────────────────

const HISTORY: &[&str] = &[
    "El órgano es uno de los instrumentos más antiguos que sigue en uso. Sus orígenes se remontan al siglo III a.C. con el hydraulis griego. 🎹",
    "Los órganos de tubos modernos empezaron a aparecer en las iglesias europeas alrededor del siglo VIII. ⛪",
    "El período barroco (1600-1750) se considera la edad de oro de la música para órgano, con compositores como Bach llevando el instrumento a su máxima expresión. 🎼",
    "En el siglo XIX, los órganos se volvieron más grandes y versátiles, incorporando nuevos registros y mecanismos. 🔧",
    "El órgano Hammond fue inventado en 1935 por Laurens Hammond como una alternativa económica a los órganos de tubos para iglesias. 💰",
    "¿Sabías que el primer órgano documentado en España llegó como regalo del emperador bizantino Constantino V al rey Pipino el Breve en el año 757? 📜",
    "Durante la Revolución Francesa, muchos órganos fueron destruidos por considerarse símbolos del antiguo régimen. ¡Menos mal que no todos corrieron esa suerte! 🇫🇷",
    "El órgano más antiguo del mundo que todavía funciona está en la Basílica de Valère en Sion, Suiza, y data de alrededor de 1435. ¡Casi 600 años sonando! 🇨🇭",
];

const COMPOSERS: &[&str] = &[
    "Johann Sebastian Bach es considerado el más grande compositor para órgano. Sus obras incluyen la Toccata y Fuga en Re menor y los Preludios Corales. 👑",
    "Dietrich Buxtehude fue una gran influencia para Bach. Sus obras para órgano incluyen preludios, fugas y chaconas. 🎵",
    "César Franck revitalizó la música de órgano en Francia durante el siglo XIX con obras como sus Tres Corales. 🇫🇷",
    "Olivier Messiaen creó un lenguaje musical único para órgano en el siglo XX, con obras como 'La Nativité du Seigneur'. 🌟",
    "Felix Mendelssohn contribuyó significativamente al repertorio con sus Sonatas para órgano, ayudando a revivir el interés por Bach. 📚",
    "Charles-Marie Widor es famoso por su 'Toccata' de la Quinta Sinfonía para órgano, una pieza frecuente en bodas. 💒",
    "Louis Vierne, organista ciego de Notre-Dame de París, murió en 1937 mientras daba un recital en su amado órgano. ¡Un final dramático para un gran músico! 🎭",
    "Max Reger escribió algunas de las obras más complejas para órgano, con armonías cromáticas y estructuras contrapuntísticas densas. ¡Todo un desafío! 🧩",
    "Antonio de Cabezón, organista ciego español del siglo XVI, fue pionero en la música para teclado y una gran influencia en toda Europa. ¡Orgullo español! 🇪🇸",
    "¿Sabías que Mozart llamaba al órgano 'el rey de los instrumentos'? Aunque no compuso mucho para él, lo admiraba enormemente. 👑",
];

const STRUCTURE: &[&str] = &[
    "Un órgano de tubos consta principalmente de tubos, consolas con teclados y pedales, y un sistema para suministrar aire a los tubos. 🎛️",
    "Los teclados manuales del órgano se llaman 'manuales', y un órgano puede tener desde uno hasta siete de ellos. 🎹",
    "El pedalero es un teclado tocado con los pies, generalmente con 30-32 teclas, y controla los sonidos más graves. 👣",
    "Los registros son conjuntos de tubos con un timbre particular. Pueden simular diferentes instrumentos o crear sonidos únicos del órgano. 🎺",
    "Los tubos pueden ser labiales (como una flauta) o de lengüeta (con una vibración de caña), creando diferentes timbres. 🎵",
    "El 'secreto' es la cámara de aire presurizado que distribuye el viento a los tubos cuando se presionan las teclas. ¡Es el corazón del órgano! 💨",
    "La tracción es el sistema que conecta las teclas con las válvulas que permiten el paso del aire a los tubos. Puede ser mecánica, neumática, eléctrica o combinada. ⚡",
    "Algunos órganos gigantes tienen tubos tan grandes que podrían caber una persona dentro. El más grande puede medir hasta 19 metros de altura. ¡Imagina el sonido! 📏",
    "Los tubos de órgano se fabrican principalmente con aleaciones de estaño y plomo, aunque también pueden ser de madera, cobre o incluso bambú. 🪵",
    "Los 'tiradores' o 'registros' son los controles que el organista utiliza para seleccionar qué juegos de tubos sonarán. Un órgano grande puede tener más de 100. 🎚️",
];

const TECHNIQUE: &[&str] = &[
    "La técnica del órgano difiere del piano: no hay dinámica por presión, se debe controlar la articulación y usar registros para variar la intensidad. 🎯",
    "El 'toque legato' es fundamental en la interpretación del órgano, especialmente en música romántica y moderna. ✨",
    "La registración es el arte de seleccionar y combinar los diferentes registros para lograr el color tonal deseado. 🎨",
    "La técnica de pedaleo requiere años de práctica para dominar movimientos como el 'talón-punta' y cruces de pies. 🦶",
    "La improvisación ha sido históricamente una habilidad esencial para los organistas, especialmente en contextos litúrgicos. 🎶",
    "Un buen organista debe poder leer tres pentagramas simultáneamente: dos para las manos y uno para los pies. ¡Todo un desafío de coordinación! 👀",
    "El 'appoggiatura' es un adorno muy utilizado en la música barroca para órgano que consiste en una nota rápida antes de la nota principal. 🎭",
    "La técnica de 'staccato' en órgano es más compleja que en piano, pues depende no solo de cómo se toca la tecla sino también de la acústica del espacio. 🏛️",
    "En la interpretación de Bach, se debate entre un toque más articulado (al estilo barroco) o más legato (como en la tradición romántica). ¿Tú cuál prefieres? 🤔",
    "La técnica de pedaleo 'talón-punta' fue desarrollada en el siglo XIX y permite mayor agilidad con los pies que las técnicas antiguas. 💃",
];

const FAMOUS_ORGANS: &[&str] = &[
    "El órgano Cavaillé-Coll de Saint-Sulpice en París es uno de los instrumentos más grandes y prestigiosos del mundo. 🇫🇷",
    "El órgano de la Catedral de Notre-Dame en París es históricamente significativo y ha sido tocado por grandes músicos como Louis Vierne. 🔔",
    "El órgano Wanamaker en Filadelfia es el órgano de tubos funcional más grande del mundo, con más de 28,000 tubos. 🇺🇸",
    "El órgano Silbermann de la Iglesia de Santo Tomás en Leipzig es famoso por su asociación con J.S. Bach. 🇩🇪",
    "El órgano de la Mezquita-Catedral de Córdoba es uno de los más importantes de España, construido por el famoso organero José Martínez Colmenero. 🇪🇸",
    "El órgano del Royal Albert Hall de Londres, apodado 'La Voz de Júpiter', es uno de los más grandes del mundo con 9,999 tubos. ¿Por qué no 10,000? ¡Dicen que fue para evitar impuestos adicionales! 💷",
    "El órgano de bambú de Las Piñas, Filipinas, es único en el mundo porque sus tubos están hechos de bambú en lugar de metal. ¡Sonido exótico garantizado! 🎍",
    "El órgano de la Basílica de Mafra en Portugal tiene seis órganos que pueden tocarse simultáneamente. ¡Menudo espectáculo sonoro! 🇵🇹",
    "El llamado 'órgano de estalactitas' en Virginia, EE.UU., no es un órgano tradicional sino una formación rocosa que suena al ser golpeada. ¡La naturaleza también crea instrumentos! 🗿",
    "El órgano de la Sydney Opera House en Australia tiene 10,154 tubos y su construcción tardó 10 años. ¡Vale la pena escucharlo si visitas el país! 🦘",
];

const LITURGICAL_MUSIC: &[&str] = &[
    "El órgano ha sido el instrumento principal en la música litúrgica cristiana durante siglos. ⛪",
    "En la tradición católica, el órgano acompaña cantos, proporciona música para momentos de reflexión y marca momentos importantes de la liturgia. 🙏",
    "En las iglesias protestantes, especialmente luteranas, el órgano acompaña himnos congregacionales y corales. 📖",
    "El año litúrgico (Adviento, Navidad, Cuaresma, Pascua, etc.) tiene música específica para órgano asociada a cada temporada. 📅",
    "Muchos compositores han escrito colecciones de piezas para cubrir las necesidades del año litúrgico, como el 'Orgelbüchlein' de Bach. 📚",
    "Durante el Concilio Vaticano II (1962-1965) se discutió el papel del órgano en la liturgia, reafirmando su importancia pero abriendo la puerta a otros instrumentos. 🎸",
    "El canto gregoriano a menudo se alterna con versos de órgano en lo que se llama 'alternatim practice', una tradición que se remonta al siglo XV. 📜",
    "El Improperium es una forma específica de improvisación organística durante la liturgia del Viernes Santo. ✝️",
    "En algunas tradiciones, el órgano guarda silencio durante la Cuaresma para regresar gloriosamente en la Vigilia Pascual. 🌅",
    "Los 'versos de órgano' son piezas cortas que sustituyen versos cantados del Magnificat o de los salmos en la liturgia. 🎵",
];

const MAINTENANCE: &[&str] = &[
    "Los órganos de tubos requieren afinación regular, especialmente cuando cambian las temperaturas estacionales. 🔧",
    "La humedad es un factor crítico para los órganos de tubos: muy poca puede agrietar la madera, demasiada puede causar oxidación. 💧",
    "Los órganos históricos a menudo mantienen su entonación original, que puede ser diferente del estándar moderno A=440Hz. 🎵",
    "El mantenimiento preventivo incluye limpieza de polvo, ajuste de mecanismos y revisión de fugas de aire. 🧹",
    "La restauración de órganos históricos es una especialidad que combina conocimientos de música, historia, artesanía y conservación. 🏺",
    "Los fuelles de un órgano antiguo solían requerir personas que los accionaran manualmente durante todo el concierto o servicio. ¡Un trabajo agotador! 💪",
    "La polilla puede ser un enemigo mortal para los órganos con piezas de madera. ¡Algunos organeros utilizan tratamientos especiales para protegerlos! 🦋",
    "Cada tubo debe ser afinado individualmente, lo que significa que un órgano grande puede requerir varios días para una afinación completa. ⏱️",
    "El temperamento igual, usado en pianos modernos, no siempre se aplica en órganos históricos que pueden usar temperamentos mesotónicos u otros sistemas de afinación. 🧮",
    "El polvo es uno de los mayores enemigos del órgano, ya que puede entrar en los tubos y cambiar su sonido. Algunos órganos modernos incorporan filtros de aire. 🌬️",
];

const TRIVIA_TOPIC: &[&str] = &[
    "El órgano más pesado del mundo es el de la Catedral de Liverpool, con más de 32,000 tubos y un peso de unas 250 toneladas. ¡Como 40 elefantes! 🐘",
    "La nota más grave de un órgano puede ser tan baja que no se oye sino que se siente como una vibración. ¡Literalmente te sacude! 📳",
    "En la Edad Media, algunos órganos tenían teclas tan grandes que debían ser golpeadas con los puños o los codos. ¡No era un instrumento para delicados! 👊",
    "El órgano de agua romano (hydraulis) usaba agua para regular la presión del aire. ¡Una ingeniería avanzada para la época! 💦",
    "Algunos órganos históricos contienen metales preciosos como el oro y la plata en sus tubos para obtener timbres específicos. 💎",
    "El 'Hallelujah Chorus' de Händel a menudo se toca con órgano, aunque originalmente fue compuesto para orquesta y coro. 🎭",
    "En algunos países, los organistas tienen que aprobar exámenes oficiales para poder tocar en iglesias importantes. ¡Nada de aficionados! 📝",
    "En la época barroca, el organista a menudo también dirigía el coro y la orquesta desde el órgano. ¡Un verdadero multitasking! 🧠",
    "El aire que entra en los tubos del órgano debe ser perfectamente limpio. Incluso una partícula pequeña puede cambiar el sonido de un tubo. 🌬️",
    "Algunos tubos de órgano están hechos de madera y pueden tener forma cuadrada en lugar de cilíndrica. ¡La forma afecta al sonido! 📦",
];

const GREETINGS: &[&str] = &[
    "¡Bienvenido al Chatbot del Órgano! ¿En qué puedo ayudarte hoy? 🎹",
    "¡Hola! Soy el asistente virtual especializado en órganos musicales. ¿Qué te gustaría saber? 🎵",
    "Bienvenido al mundo del órgano. ¿Tienes alguna pregunta sobre este magnífico instrumento? 🎼",
    "¡Saludos! Estoy aquí para compartir conocimientos sobre el órgano y su música. ¿Qué te interesa saber? 🎶",
    "¡Hola organófilo! ¿Listo para explorar el fascinante mundo de los órganos musicales? 🎭",
];

const FAREWELLS: &[&str] = &[
    "¡Gracias por conversar sobre órganos! Espero haberte ayudado. ¡Hasta pronto! 👋",
    "Ha sido un placer compartir información sobre este maravilloso instrumento. ¡Vuelve pronto! 🎵",
    "Espero que hayas aprendido algo nuevo sobre el órgano hoy. ¡Hasta la próxima! 📚",
    "¡Adiós! Si tienes más preguntas sobre el órgano, no dudes en volver a consultarme. 🎹",
    "¡Que tus días estén llenos de música! ¡Hasta pronto! 🎶",
];

const NO_INFO: &[&str] = &[
    "Lo siento, no tengo información específica sobre eso. ¿Hay algo más sobre órganos que te gustaría saber? 🤔",
    "Esa es una pregunta interesante, pero no tengo datos precisos al respecto. ¿Puedo ayudarte con otro aspecto del órgano? 📝",
    "No dispongo de esa información en mi base de conocimientos. ¿Te interesa saber sobre la historia, compositores o técnica del órgano? 📚",
    "No tengo detalles sobre eso, pero puedo informarte sobre la estructura del órgano, compositores famosos o técnicas de interpretación. 🧐",
    "Mmm... esa pregunta se sale de mi registro. ¿Quieres probar con otra? 🎵",
];

const TRIVIA: &[&str] = &[
    "¿Sabías que el órgano de la Catedral de Passau en Alemania tiene 17,974 tubos y 233 registros? ¡Es uno de los órganos de iglesia más grandes del mundo! 🏆",
    "En la antigüedad, se necesitaban hasta 12 personas para accionar los fuelles de un órgano grande. ¡Todo un equipo de 'sopladores'! 💨",
    "El organista Johann Ludwig Krebs fue alumno de Bach. Su apellido significa 'cangrejo' en alemán, y Bach bromeaba: '¡Es el único cangrejo en mi arroyo!' 🦀",
    "Algunos órganos tienen tubos hechos de madera de más de 500 años de antigüedad que siguen funcionando perfectamente. ¡Una longevidad impresionante! 🌳",
    "¿Te imaginas tocar 7 teclados a la vez? El órgano Atlantic City Convention Hall tiene ese número de manuales. ¡Necesitarías ser un pulpo! 🐙",
    "Mozart escribió música para un instrumento llamado 'Orgelwalze', un tipo de órgano mecánico similar a una caja de música. 🎡",
    "El órgano de la abadía de Weingarten en Alemania tiene una fachada tan espectacular que se le conoce como 'el órgano Gabler' en honor a su constructor. ¡Un verdadero tesoro barroco! 🏛️",
    "El dióxido de carbono exhalado por la congregación en una iglesia puede desafinar los tubos del órgano con el tiempo. ¡Respirar afecta a la música! 😮",
];

const SUGGESTIONS_HEADER: &str =
    "Si no sabes qué preguntar, estas son algunas preguntas populares:";
const HELP: &str =
    "Puedes preguntarme sobre historia, compositores, estructura, técnica, órganos famosos, música litúrgica, mantenimiento u otras curiosidades del órgano. También puedo contarte algún dato curioso aleatorio si escribes 'dato curioso'.";
const FUN_MODE_ON: &str =
    "¡Modo divertido activado! 🎭 Prepárate para respuestas con más ritmo y melodía.";
const FUN_MODE_OFF: &str =
    "Modo divertido desactivado. Volvemos a la seriedad del órgano. 🎹";
