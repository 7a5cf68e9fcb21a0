#[derive(Debug, Clone)]
pub enum Message {
    // === DASHBOARD MESSAGES ===
    DashboardTitle,
    ViewHeader(String), // "Monday, May 5, 2025" / "Week of May 5, 2025"
    NoBlocksForView(String),
    BlocksHeader,
    LegendHeader,
    TimeBreakdownHeader,
    CategoryBreakdownHeader,
    FocusPercent(u32),
    ProductiveTime(String),
    IdleTime(String),
    WeekendBlocksHidden(usize),

    // === EDIT MESSAGES ===
    EditingBlock(String), // category name
    BlockTime(String),
    BlockDuration(String),
    PromptDescription,
    DescriptionSaved(String), // block id
    DescriptionUnchanged,
    UpdatedBlocksHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleView,
    ConfigModuleData,
    PromptSelectModules,
    PromptDefaultView,
    PromptBlockGap,
    PromptShowWeekends,
    PromptTimelineWidth,
    PromptColor,
    PromptDataFile,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === LOGGING MESSAGES ===
    LoggingInitialized(String), // filter
}
