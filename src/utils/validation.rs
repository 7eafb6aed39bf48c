use chrono::NaiveTime;
use poise::serenity_prelude::GuildId;

/// Validation error types
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    NotInGuild,
    InvalidTime(String),
    MissingChannel,
    InvalidScheduleIndex { given: usize, pending: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotInGuild => write!(f, "This command must be used in a server"),
            ValidationError::InvalidTime(given) => {
                write!(f, "Invalid time '{}'. Use HH:MM (24-hour), e.g. 21:00", given)
            }
            ValidationError::MissingChannel => {
                write!(f, "Set a QOTD channel first with `/qotd set_channel`")
            }
            ValidationError::InvalidScheduleIndex { given, pending } => {
                write!(
                    f,
                    "No schedule #{} (there are {} pending)",
                    given, pending
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse a daily posting time in HH:MM 24-hour format
pub fn parse_time_string(time_str: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(time_str.trim(), "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(time_str.to_string()))
}

/// Extract guild ID from context, returning error if not in a guild
pub fn require_guild(guild_id: Option<GuildId>) -> Result<GuildId, ValidationError> {
    guild_id.ok_or(ValidationError::NotInGuild)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_guild() {
        assert!(require_guild(None).is_err());
        assert!(require_guild(Some(GuildId::new(123))).is_ok());
    }

    #[test]
    fn test_parse_time_string_accepts_valid_times() {
        assert_eq!(
            parse_time_string("21:00"),
            Ok(NaiveTime::from_hms_opt(21, 0, 0).unwrap())
        );
        assert_eq!(
            parse_time_string("9:00"),
            Ok(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
        assert_eq!(
            parse_time_string("23:59"),
            Ok(NaiveTime::from_hms_opt(23, 59, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_time_string_rejects_out_of_range() {
        assert_eq!(
            parse_time_string("25:00"),
            Err(ValidationError::InvalidTime("25:00".to_string()))
        );
        assert!(parse_time_string("12:60").is_err());
    }

    #[test]
    fn test_parse_time_string_rejects_malformed() {
        assert!(parse_time_string("2100").is_err());
        assert!(parse_time_string("21").is_err());
        assert!(parse_time_string("").is_err());
        assert!(parse_time_string("nine o'clock").is_err());
    }
}
