use serde::{Deserialize, Serialize};

use super::validation::{NumberValidator, StringValidator, ValidationError};

/// 目录中的一条内容（电影或剧集）
///
/// 仓库持有记录，搜索引擎只读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    pub year: Option<i32>,          // None 表示未知（0 会被归一化为 None）
    pub genres: Vec<Genre>,
    pub rating: Option<f32>,        // 缺失与 0 分不同
    pub creator: Option<String>,    // 电影为导演，剧集为主创
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    Series,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Movie, ContentKind::Series];
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "Movie"),
            ContentKind::Series => write!(f, "Series"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(ContentKind::Movie),
            "series" | "tv" | "show" => Ok(ContentKind::Series),
            _ => Err(ValidationError::InvalidContentKind(s.to_string())),
        }
    }
}

/// 类型标签（封闭枚举）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 18] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// 界面上显示的名称，关键词匹配也用它
    pub fn display_name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Science Fiction",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Genre {
    type Err = ValidationError;

    /// 同时接受变体名（"SciFi"）和显示名（"Science Fiction"），不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| {
                genre.display_name().to_lowercase() == needle
                    || format!("{:?}", genre).to_lowercase() == needle
            })
            .ok_or_else(|| ValidationError::InvalidGenre(s.to_string()))
    }
}

impl ContentRecord {
    /// 创建新的内容记录
    pub fn new(title: impl Into<String>, kind: ContentKind) -> Result<Self, ValidationError> {
        let title = title.into();
        StringValidator::validate_title(&title)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            kind,
            year: None,
            genres: Vec::new(),
            rating: None,
            creator: None,
        })
    }

    /// 使用调用方提供的 ID
    pub fn with_id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        StringValidator::validate_id(&id)?;
        self.id = id;
        Ok(self)
    }

    /// 设置年份，0 视为未知
    pub fn set_year(&mut self, year: Option<i32>) -> Result<(), ValidationError> {
        let year = year.filter(|&y| y != 0);
        NumberValidator::validate_year(&year)?;
        self.year = year;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: Option<f32>) -> Result<(), ValidationError> {
        NumberValidator::validate_rating(&rating)?;
        self.rating = rating;
        Ok(())
    }

    /// 设置类型（去重，保持原有顺序）
    pub fn set_genres(&mut self, genres: &[Genre]) {
        let mut unique = Vec::with_capacity(genres.len());
        for genre in genres {
            if !unique.contains(genre) {
                unique.push(*genre);
            }
        }
        self.genres = unique;
    }

    pub fn set_creator(&mut self, creator: Option<String>) -> Result<(), ValidationError> {
        let creator = creator.filter(|c| !c.trim().is_empty());
        StringValidator::validate_creator(&creator)?;
        self.creator = creator;
        Ok(())
    }

    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_rejects_empty_title() {
        assert!(matches!(
            ContentRecord::new("  ", ContentKind::Movie),
            Err(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn test_zero_year_means_unknown() {
        let mut record = ContentRecord::new("Dune", ContentKind::Movie).unwrap();
        record.set_year(Some(0)).unwrap();
        assert_eq!(record.year, None);

        record.set_year(Some(2021)).unwrap();
        assert_eq!(record.year, Some(2021));
    }

    #[test]
    fn test_set_genres_deduplicates() {
        let mut record = ContentRecord::new("Dune", ContentKind::Movie).unwrap();
        record.set_genres(&[Genre::SciFi, Genre::Drama, Genre::SciFi]);
        assert_eq!(record.genres, vec![Genre::SciFi, Genre::Drama]);
    }

    #[test]
    fn test_genre_from_str() {
        assert_eq!("scifi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("Science Fiction".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!(" comedy ".parse::<Genre>().unwrap(), Genre::Comedy);
        assert!(matches!(
            "Telenovela".parse::<Genre>(),
            Err(ValidationError::InvalidGenre(_))
        ));
    }

    #[test]
    fn test_content_kind_from_str() {
        assert_eq!("MOVIE".parse::<ContentKind>().unwrap(), ContentKind::Movie);
        assert_eq!("tv".parse::<ContentKind>().unwrap(), ContentKind::Series);
        assert!("podcast".parse::<ContentKind>().is_err());
    }
}
