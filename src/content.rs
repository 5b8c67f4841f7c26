//! Fixed page copy: hero numbers, the news feed, legend and footer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Cycles the selector. Page copy stays in Spanish either way.
    pub fn next(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }
}

pub const BRAND: &str = "LaLiga";
pub const BRAND_FULL: &str = "LaLiga EA Sports";
pub const HERO_TITLE: &str = "Bienvenido a La Liga";
pub const HERO_SUBTITLE: &str = "La liga más emocionante del mundo te espera. Descubre equipos, \
estadísticas, clasificaciones y las últimas noticias del fútbol español.";

pub const HERO_STATS: [(&str, &str); 3] = [("20", "Equipos"), ("38", "Jornadas"), ("380", "Partidos")];

pub const TEAMS_TITLE: &str = "Equipos de LaLiga EA Sports";
pub const TEAMS_INTRO: &str = "Conoce a los 20 clubes que luchan por la gloria en la temporada \
2024-2025. Cada equipo con su historia, tradición y pasión únicas.";
pub const TEAMS_LOADING: &str = "Cargando equipos de LaLiga...";

pub const STANDINGS_TITLE: &str = "Tabla de Clasificación";
pub const STANDINGS_INTRO: &str = "Sigue la lucha por el título, las plazas europeas y la \
permanencia. Actualizada con los resultados más recientes.";
pub const STANDINGS_LOADING: &str = "Cargando clasificación actual...";
pub const STANDINGS_HEADER: [&str; 10] = ["Pos", "Equipo", "Pts", "PJ", "G", "E", "P", "GF", "GC", "DG"];

pub const STATS_TITLE: &str = "Estadísticas LaLiga";
pub const SCORERS_BADGE: &str = "TOP SCORERS";
pub const SCORERS_TITLE: &str = "Máximos Goleadores";
pub const DATA_LOADING: &str = "Cargando datos...";

pub const NEWS_TITLE: &str = "Centro de Noticias";
pub const NEWS_INTRO: &str = "Las últimas novedades del mundo LaLiga: resultados, fichajes, \
análisis y más.";
pub const MATCHES_TITLE: &str = "Próximos Partidos";
pub const MATCHES_LOADING: &str = "Cargando partidos...";
pub const LATEST_NEWS_TITLE: &str = "Últimas Noticias";
pub const VIEW_ALL_NEWS: &str = "Ver todas las noticias";

/// Decorative home/draw/away prediction split shown on every match card.
pub const PREDICTION_SPLIT: [u16; 3] = [45, 25, 30];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub category: &'static str,
    pub date: &'static str,
    pub kind: Option<&'static str>,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const NEWS: [NewsItem; 6] = [
    NewsItem {
        category: "EL CLÁSICO",
        date: "VIE 18.10.2025",
        kind: Some("RESUMEN DE PARTIDO"),
        title: "Real Madrid vs Barcelona: El Clásico que define LaLiga",
        summary: "Los dos gigantes del fútbol español se enfrentan en un duelo decisivo para el \
liderato de LaLiga EA Sports en el Santiago Bernabéu.",
    },
    NewsItem {
        category: "HIGHLIGHTS",
        date: "JUE 17.10.2025",
        kind: None,
        title: "Todos los goles de Julián Álvarez",
        summary: "El argentino del Atlético suma 6 goles en LaLiga, destacando con tantos decisivos.",
    },
    NewsItem {
        category: "JUGADOR",
        date: "MIE 16.10.2025",
        kind: None,
        title: "Lo mejor de Frenkie de Jong",
        summary: "El centrocampista holandés se consolida como pieza clave del Barcelona esta \
temporada.",
    },
    NewsItem {
        category: "FICHAJE",
        date: "MAR 15.10.2025",
        kind: None,
        title: "Mbappé lidera la tabla goleadora",
        summary: "El francés alcanza los 9 goles en LaLiga y se consolida como máximo artillero.",
    },
    NewsItem {
        category: "JORNADA",
        date: "LUN 14.10.2025",
        kind: None,
        title: "Los mejores momentos de la J9",
        summary: "Repaso a los goles, jugadas y momentos más destacados de la jornada pasada.",
    },
    NewsItem {
        category: "TECNOLOGÍA",
        date: "DOM 13.10.2025",
        kind: None,
        title: "Las decisiones VAR más polémicas",
        summary: "Análisis de las jugadas más controvertidas revisadas por el VAR esta temporada.",
    },
];

pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [(&'static str, Option<&'static str>)],
}

pub const FOOTER_SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "Competición",
        links: &[
            ("Clasificación", Some("#clasificacion")),
            ("Equipos", Some("#equipos")),
            ("Estadísticas", Some("#estadisticas")),
        ],
    },
    FooterSection {
        title: "Contenido",
        links: &[
            ("Noticias", Some("#noticias")),
            ("Calendario", None),
            ("Resultados", None),
        ],
    },
    FooterSection {
        title: "Síguenos",
        links: &[("Twitter", None), ("Facebook", None), ("Instagram", None)],
    },
];

pub const FOOTER_TAGLINE: &str = "La liga más emocionante del mundo";
pub const FOOTER_COPYRIGHT: &str = "© 2025 LaLiga EA Sports. Todos los derechos reservados.";
pub const FOOTER_LEGAL: [&str; 3] = ["Privacidad", "Términos", "Cookies"];
