use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub director: String,
}

impl Movie {
    pub fn new(title: &str, year: i32, genre: &str, director: &str) -> Self {
        Movie {
            title: title.to_string(),
            year,
            genre: genre.to_string(),
            director: director.to_string(),
        }
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        return vec![
            self.title.clone(),
            self.year.to_string(),
            self.genre.clone(),
            self.director.clone(),
        ];
    }

    pub fn csv_titles() -> Vec<&'static str> {
        return vec!["Title", "Year", "Genre", "Director"];
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
