use fnv::FnvHashMap;

/// The icon catalogue used by the page's content data.
///
/// Icon references arrive as strings (`data-icon="graduation-cap"`); they
/// are parsed once into a closed variant set so an unknown name maps to a
/// visible neutral glyph instead of silently substituting a different icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Code,
    Database,
    Cloud,
    Server,
    Terminal,
    Cpu,
    Globe,
    Award,
    BookOpen,
    Briefcase,
    GraduationCap,
    FileText,
    FileSpreadsheet,
    Sparkles,
    Activity,
    Users,
    Clock,
    Flag,
    MessageSquare,
    MonitorPlay,
    Presentation,
    Wrench,
    /// Unknown name; renders as a neutral dot.
    Fallback,
}

const CATALOGUE: &[(&str, IconKind)] = &[
    ("code", IconKind::Code),
    ("database", IconKind::Database),
    ("cloud", IconKind::Cloud),
    ("server", IconKind::Server),
    ("terminal", IconKind::Terminal),
    ("cpu", IconKind::Cpu),
    ("globe", IconKind::Globe),
    ("award", IconKind::Award),
    ("book-open", IconKind::BookOpen),
    ("briefcase", IconKind::Briefcase),
    ("graduation-cap", IconKind::GraduationCap),
    ("file-text", IconKind::FileText),
    ("file-spreadsheet", IconKind::FileSpreadsheet),
    ("sparkles", IconKind::Sparkles),
    ("activity", IconKind::Activity),
    ("users", IconKind::Users),
    ("clock", IconKind::Clock),
    ("flag", IconKind::Flag),
    ("message-square", IconKind::MessageSquare),
    ("monitor-play", IconKind::MonitorPlay),
    ("presentation", IconKind::Presentation),
    ("wrench", IconKind::Wrench),
];

impl IconKind {
    pub fn from_name(name: &str) -> Self {
        lookup().get(name).copied().unwrap_or(IconKind::Fallback)
    }

    /// Sprite id in the page's SVG sheet. Ids are the catalogue names with
    /// an `icon-` prefix; the sheet is generated from the same list.
    pub fn glyph_id(self) -> &'static str {
        match self {
            IconKind::Code => "icon-code",
            IconKind::Database => "icon-database",
            IconKind::Cloud => "icon-cloud",
            IconKind::Server => "icon-server",
            IconKind::Terminal => "icon-terminal",
            IconKind::Cpu => "icon-cpu",
            IconKind::Globe => "icon-globe",
            IconKind::Award => "icon-award",
            IconKind::BookOpen => "icon-book-open",
            IconKind::Briefcase => "icon-briefcase",
            IconKind::GraduationCap => "icon-graduation-cap",
            IconKind::FileText => "icon-file-text",
            IconKind::FileSpreadsheet => "icon-file-spreadsheet",
            IconKind::Sparkles => "icon-sparkles",
            IconKind::Activity => "icon-activity",
            IconKind::Users => "icon-users",
            IconKind::Clock => "icon-clock",
            IconKind::Flag => "icon-flag",
            IconKind::MessageSquare => "icon-message-square",
            IconKind::MonitorPlay => "icon-monitor-play",
            IconKind::Presentation => "icon-presentation",
            IconKind::Wrench => "icon-wrench",
            IconKind::Fallback => "icon-dot",
        }
    }

    pub fn known_names() -> impl Iterator<Item = &'static str> {
        CATALOGUE.iter().map(|(name, _)| *name)
    }
}

fn lookup() -> &'static FnvHashMap<&'static str, IconKind> {
    use std::sync::OnceLock;
    static LOOKUP: OnceLock<FnvHashMap<&'static str, IconKind>> = OnceLock::new();
    LOOKUP.get_or_init(|| CATALOGUE.iter().copied().collect())
}
