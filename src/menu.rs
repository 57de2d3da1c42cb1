//! Menu selections read from the prompt

use crate::error::TaskError;
use std::str::FromStr;

/// Top-level menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Display,
    Edit,
    Delete,
    Complete,
    Filter,
    Save,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(1) => Ok(MenuChoice::Create),
            Ok(2) => Ok(MenuChoice::Display),
            Ok(3) => Ok(MenuChoice::Edit),
            Ok(4) => Ok(MenuChoice::Delete),
            Ok(5) => Ok(MenuChoice::Complete),
            Ok(6) => Ok(MenuChoice::Filter),
            Ok(7) => Ok(MenuChoice::Save),
            Ok(8) => Ok(MenuChoice::Exit),
            _ => Err(TaskError::InvalidMenuChoice(s.trim().to_string())),
        }
    }
}

/// Filter sub-menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    Pending,
    Completed,
    DueDate,
    Priority,
}

impl FromStr for FilterChoice {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(1) => Ok(FilterChoice::Pending),
            Ok(2) => Ok(FilterChoice::Completed),
            Ok(3) => Ok(FilterChoice::DueDate),
            Ok(4) => Ok(FilterChoice::Priority),
            _ => Err(TaskError::InvalidMenuChoice(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Create);
        assert_eq!(" 8 ".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!(matches!(
            "9".parse::<MenuChoice>(),
            Err(TaskError::InvalidMenuChoice(_))
        ));
        assert!(matches!(
            "save".parse::<MenuChoice>(),
            Err(TaskError::InvalidMenuChoice(_))
        ));
        assert!("0".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_filter_choice_parse() {
        assert_eq!("3".parse::<FilterChoice>().unwrap(), FilterChoice::DueDate);
        assert!("5".parse::<FilterChoice>().is_err());
    }
}
