use thiserror::Error;

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title is too long (max 500 characters)")]
    TitleTooLong,

    #[error("Invalid ID format (must not be empty)")]
    InvalidId,

    #[error("Invalid year: {0} (must be between 1800 and 2100)")]
    InvalidYear(i32),

    #[error("Invalid rating: {0} (must be between 0.0 and 10.0)")]
    InvalidRating(f32),

    #[error("Invalid content kind: {0}")]
    InvalidContentKind(String),

    #[error("Invalid genre: {0}")]
    InvalidGenre(String),

    #[error("Invalid sort mode: {0}")]
    InvalidSortMode(String),

    #[error("Creator name is too long (max 100 characters)")]
    CreatorNameTooLong,
}

impl ValidationError {
    /// 是否属于查询条件错误（调用方在提交查询前就能得知）
    pub fn is_invalid_criteria(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidYear(_)
                | ValidationError::InvalidRating(_)
                | ValidationError::InvalidContentKind(_)
                | ValidationError::InvalidGenre(_)
                | ValidationError::InvalidSortMode(_)
        )
    }
}

/// 字符串验证工具
pub struct StringValidator;

impl StringValidator {
    pub fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if title.chars().count() > 500 {
            return Err(ValidationError::TitleTooLong);
        }

        Ok(())
    }

    pub fn validate_id(id: &str) -> Result<(), ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::InvalidId);
        }
        Ok(())
    }

    pub fn validate_creator(creator: &Option<String>) -> Result<(), ValidationError> {
        if let Some(name) = creator {
            if name.chars().count() > 100 {
                return Err(ValidationError::CreatorNameTooLong);
            }
        }
        Ok(())
    }
}

/// 数值验证工具
pub struct NumberValidator;

impl NumberValidator {
    pub fn validate_year(year: &Option<i32>) -> Result<(), ValidationError> {
        if let Some(y) = year {
            if *y < 1800 || *y > 2100 {
                return Err(ValidationError::InvalidYear(*y));
            }
        }
        Ok(())
    }

    pub fn validate_rating(rating: &Option<f32>) -> Result<(), ValidationError> {
        if let Some(r) = rating {
            // NaN 也会落到这里
            if !r.is_finite() || *r < 0.0 || *r > 10.0 {
                return Err(ValidationError::InvalidRating(*r));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(StringValidator::validate_title("Dune").is_ok());
        assert_eq!(StringValidator::validate_title("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(
            StringValidator::validate_title(&"x".repeat(501)),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(NumberValidator::validate_rating(&None).is_ok());
        assert!(NumberValidator::validate_rating(&Some(0.0)).is_ok());
        assert!(NumberValidator::validate_rating(&Some(10.0)).is_ok());
        assert!(NumberValidator::validate_rating(&Some(10.5)).is_err());
        assert!(NumberValidator::validate_rating(&Some(-0.1)).is_err());
        assert!(NumberValidator::validate_rating(&Some(f32::NAN)).is_err());
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(NumberValidator::validate_year(&Some(2024)).is_ok());
        assert_eq!(
            NumberValidator::validate_year(&Some(1700)),
            Err(ValidationError::InvalidYear(1700))
        );
    }

    #[test]
    fn test_invalid_criteria_classification() {
        assert!(ValidationError::InvalidGenre("x".into()).is_invalid_criteria());
        assert!(!ValidationError::EmptyTitle.is_invalid_criteria());
    }
}
