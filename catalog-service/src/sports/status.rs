//! Event status derived from the advertised window

use std::fmt;

use chrono::{DateTime, Utc};

/// Where an event sits relative to the current instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    /// Not started yet
    Open,
    /// Started and not yet finished
    Ongoing,
    /// Finished, or starting exactly now
    Closed,
}

impl EventStatus {
    /// Status of an event advertised for `[start, end]` as seen at `now`
    pub fn at(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start > now {
            Self::Open
        } else if start < now && end > now {
            Self::Ongoing
        } else {
            Self::Closed
        }
    }

    /// Parse a status keyword, ignoring case and surrounding whitespace
    pub fn parse(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        [Self::Open, Self::Ongoing, Self::Closed]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(keyword))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Ongoing => "ONGOING",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_future_start_is_open() {
        let now = Utc::now();
        let status = EventStatus::at(now + Duration::hours(1), now + Duration::hours(3), now);
        assert_eq!(status, EventStatus::Open);
    }

    #[test]
    fn test_inside_window_is_ongoing() {
        let now = Utc::now();
        let status = EventStatus::at(now - Duration::hours(1), now + Duration::hours(1), now);
        assert_eq!(status, EventStatus::Ongoing);
    }

    #[test]
    fn test_past_end_is_closed() {
        let now = Utc::now();
        let status = EventStatus::at(now - Duration::days(2), now - Duration::days(1), now);
        assert_eq!(status, EventStatus::Closed);
    }

    #[test]
    fn test_start_equal_to_now_is_closed() {
        let now = Utc::now();
        let status = EventStatus::at(now, now + Duration::hours(2), now);
        assert_eq!(status, EventStatus::Closed);
    }

    #[test]
    fn test_end_equal_to_now_is_closed() {
        let now = Utc::now();
        let status = EventStatus::at(now - Duration::hours(2), now, now);
        assert_eq!(status, EventStatus::Closed);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(EventStatus::parse("OPEN"), Some(EventStatus::Open));
        assert_eq!(EventStatus::parse(" ongoing "), Some(EventStatus::Ongoing));
        assert_eq!(EventStatus::parse("Closed"), Some(EventStatus::Closed));
        assert_eq!(EventStatus::parse("finished"), None);
        assert_eq!(EventStatus::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EventStatus::Ongoing.to_string(), "ONGOING");
    }
}
