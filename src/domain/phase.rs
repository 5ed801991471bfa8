use std::fmt;
use std::str::FromStr;

/// Foreground state of the app as reported by the host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    Active,
    Inactive,
    Background,
}

impl LifecyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecyclePhase::Active => "active",
            LifecyclePhase::Inactive => "inactive",
            LifecyclePhase::Background => "background",
        }
    }
}

impl FromStr for LifecyclePhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(LifecyclePhase::Active),
            "inactive" => Ok(LifecyclePhase::Inactive),
            "background" => Ok(LifecyclePhase::Background),
            other => Err(format!("unknown lifecycle phase: {other}")),
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Active".parse::<LifecyclePhase>(), Ok(LifecyclePhase::Active));
        assert_eq!(" inactive ".parse::<LifecyclePhase>(), Ok(LifecyclePhase::Inactive));
        assert_eq!("BACKGROUND".parse::<LifecyclePhase>(), Ok(LifecyclePhase::Background));
    }

    #[test]
    fn rejects_unknown_phase() {
        assert_eq!(
            "backgrounded".parse::<LifecyclePhase>(),
            Err("unknown lifecycle phase: backgrounded".to_string())
        );
    }
}
