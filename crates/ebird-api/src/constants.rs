//! Values and limits used by the eBird API

pub const DEFAULT_BACK: u32 = 14;
pub const DEFAULT_DETAIL: &str = "simple";
pub const DEFAULT_DISTANCE: u32 = 25;
pub const DEFAULT_HOTSPOTS_ONLY: bool = false;
pub const DEFAULT_PROVISIONAL: bool = false;
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_OBSERVATION_ORDER: &str = "date";
pub const DEFAULT_OBSERVATION_RANK: &str = "mrec";
pub const DEFAULT_MAX_OBSERVERS: u32 = 100;
pub const DEFAULT_MAX_CHECKLISTS: u32 = 10;
pub const DEFAULT_TOP_100_RANK: &str = "spp";

/// Upper bound for `maxResults` on the recent/historic observation endpoints
pub const MAX_OBSERVATIONS: u32 = 10_000;
/// Upper bound for `maxResults` on the nearest-species endpoint
pub const MAX_NEAREST_OBSERVATIONS: u32 = 1_000;
/// Upper bound for `maxResults` on the top 100 endpoint
pub const MAX_OBSERVERS: u32 = 100;
/// Upper bound for `maxResults` on the checklist feed
pub const MAX_CHECKLISTS: u32 = 200;
/// Maximum number of areas accepted by a single observations call
pub const MAX_AREAS: usize = 10;

pub const MAX_BACK: u32 = 30;
pub const MAX_DISTANCE: u32 = 50;

/// Connect/read timeout for every request, in seconds. Now and then the
/// connection to eBird hangs, so a call fails rather than waiting forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Locales with translated species common names, keyed by language name
pub const LOCALES: &[(&str, &str)] = &[
    ("Bulgarian", "bg"),
    ("Chinese", "zh"),
    ("Chinese (Simple)", "zh_SIM"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Dutch", "nl"),
    ("Danish", "da"),
    ("English", "en"),
    ("English (Australia)", "en_AU"),
    ("English (India)", "en_IN"),
    ("English (IOC)", "en_IOC"),
    ("English (Hawaii)", "en_HAW"),
    ("English (Kenya)", "en_KE"),
    ("English (Malaysia)", "en_MY"),
    ("English (New Zealand)", "en_NZ"),
    ("English (Philippines)", "en_PH"),
    ("English (South Africa)", "en_ZA"),
    ("English (United Arab Emirates)", "en_AE"),
    ("English (Great Britain)", "en_UK"),
    ("English (United States)", "en_US"),
    ("Faroese", "fo"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("French (AOU)", "fr_AOU"),
    ("French (Canada)", "fr_CA"),
    ("German", "de"),
    ("French (Guadeloupe)", "fr_GP"),
    ("French (Haiti)", "fr_HT"),
    ("Haitian", "ht_HT"),
    ("Hebrew", "iw"),
    ("Hungarian", "hu"),
    ("Indonesian", "id"),
    ("Icelandic", "is"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Malayalam", "ml"),
    ("Mongolian", "mn"),
    ("Norwegian", "no"),
    ("Polish", "pl"),
    ("Portuguese (Portugal)", "pt_PT"),
    ("Portuguese (Brasil)", "pt_BR"),
    ("Russian", "ru"),
    ("Serbian", "sr"),
    ("Slovenian", "sl"),
    ("Spanish", "es"),
    ("Spanish (Argentina)", "es_AR"),
    ("Spanish (Chile)", "es_CL"),
    ("Spanish (Costa Rica)", "es_CR"),
    ("Spanish (Cuba)", "es_CU"),
    ("Spanish (Dominican Republic)", "es_DO"),
    ("Spanish (Ecuador)", "es_EC"),
    ("Spanish (Spain)", "es_ES"),
    ("Spanish (Mexico)", "es_MX"),
    ("Spanish (Panama)", "es_PA"),
    ("Spanish (Puerto Rico)", "es_PR"),
    ("Spanish (Uruguay)", "es_UY"),
    ("Spanish (Venezuela)", "es_VE"),
    ("Swedish", "sv"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
];

pub const SPECIES_CATEGORIES: &[&str] = &[
    "domestic",
    "form",
    "hybrid",
    "intergrade",
    "issf",
    "slash",
    "species",
    "spuh",
];

pub const DETAIL_LEVELS: &[&str] = &["simple", "full"];

pub const SPECIES_ORDERING: &[&str] = &["ebird", "merlin"];

pub const SPECIES_SORT: &[&str] = &["date", "species"];

pub const REGION_TYPES: &[&str] = &["country", "subnational1", "subnational2"];

/// Region types understood by the legacy reference endpoints
pub const LEGACY_REGION_TYPES: &[&str] = &["bcr", "country", "subnational1", "subnational2"];

pub const TOP_100_RANK: &[&str] = &["spp", "cl"];

pub const OBSERVATION_RANK: &[&str] = &["mrec", "create"];
