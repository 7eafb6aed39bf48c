/// Title used for every posted question embed
pub const QOTD_TITLE: &str = "🗓️ MDickie QOTD";

/// Footer shown under every posted question
pub const QOTD_FOOTER: &str = "Answer below! A thread will be created for answers when possible.";

/// Name of the thread opened under each posted question
pub const THREAD_NAME: &str = "QOTD Answers";

/// How often the scheduler checks for due posts, in seconds
pub const TICK_INTERVAL_SECS: u64 = 15;

/// Default path of the guild schedule file
pub const DEFAULT_DATA_FILE: &str = "qotd_data.json";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "qotd_rs=info";
