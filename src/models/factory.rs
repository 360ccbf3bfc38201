use super::{ContentKind, ContentRecord, Genre, ValidationError};

/// 内容记录工厂
pub struct ContentFactory;

impl ContentFactory {
    /// 一次性填充常用字段
    pub fn from_parts(
        id: &str,
        title: &str,
        kind: ContentKind,
        year: Option<i32>,
        genres: &[Genre],
        rating: Option<f32>,
        creator: Option<&str>,
    ) -> Result<ContentRecord, ValidationError> {
        let mut record = ContentRecord::new(title, kind)?.with_id(id)?;
        record.set_year(year)?;
        record.set_genres(genres);
        record.set_rating(rating)?;
        record.set_creator(creator.map(str::to_string))?;
        Ok(record)
    }

    /// 示例目录（二进制启动时和测试中使用）
    pub fn sample_catalog() -> Result<Vec<ContentRecord>, ValidationError> {
        use ContentKind::{Movie, Series};
        use Genre::*;

        Ok(vec![
            Self::from_parts("m-001", "Dune", Movie, Some(2021), &[SciFi, Adventure], Some(8.0), Some("Denis Villeneuve"))?,
            Self::from_parts("m-002", "Dune: Part Two", Movie, Some(2024), &[SciFi, Adventure], Some(8.5), Some("Denis Villeneuve"))?,
            Self::from_parts("m-003", "Arrival", Movie, Some(2016), &[SciFi, Drama], Some(7.9), Some("Denis Villeneuve"))?,
            Self::from_parts("m-004", "The Grand Budapest Hotel", Movie, Some(2014), &[Comedy, Drama], Some(8.1), Some("Wes Anderson"))?,
            Self::from_parts("m-005", "Spirited Away", Movie, Some(2001), &[Animation, Fantasy, Family], Some(8.6), Some("Hayao Miyazaki"))?,
            Self::from_parts("m-006", "No Country for Old Men", Movie, Some(2007), &[Crime, Thriller, Western], Some(8.2), Some("Joel Coen"))?,
            Self::from_parts("m-007", "Untitled Festival Cut", Movie, None, &[Documentary], None, None)?,
            Self::from_parts("s-001", "Breaking Bad", Series, Some(2008), &[Crime, Drama, Thriller], Some(9.5), Some("Vince Gilligan"))?,
            Self::from_parts("s-002", "The Office", Series, Some(2005), &[Comedy], Some(9.0), Some("Greg Daniels"))?,
            Self::from_parts("s-003", "Dark", Series, Some(2017), &[SciFi, Mystery, Thriller], Some(8.7), Some("Baran bo Odar"))?,
            Self::from_parts("s-004", "Band of Brothers", Series, Some(2001), &[War, History, Drama], Some(9.4), None)?,
            Self::from_parts("s-005", "Pilot Season", Series, None, &[Comedy], None, None)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = ContentFactory::sample_catalog().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.iter().any(|r| r.kind == ContentKind::Series));
        assert!(catalog.iter().any(|r| r.year.is_none()));
        assert!(catalog.iter().any(|r| r.rating.is_none()));
    }

    #[test]
    fn test_from_parts_rejects_invalid_rating() {
        let result = ContentFactory::from_parts("x", "Bad", ContentKind::Movie, None, &[], Some(12.0), None);
        assert!(matches!(result, Err(ValidationError::InvalidRating(_))));
    }
}
