//! Interface strings and date formatting per site language

use chrono::{Datelike, NaiveDate};

/// Fixed interface strings used by the page shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub back_to_articles: &'static str,
    pub latest_articles: &'static str,
    pub read_also: &'static str,
    pub read_more: &'static str,
    pub not_found_title: &'static str,
    pub not_found_text: &'static str,
}

const EN: Labels = Labels {
    back_to_articles: "Back to articles",
    latest_articles: "Latest articles",
    read_also: "Read also",
    read_more: "Read more",
    not_found_title: "Page not found",
    not_found_text: "The article you are looking for does not exist.",
};

const RU: Labels = Labels {
    back_to_articles: "Вернуться к статьям",
    latest_articles: "Последние статьи",
    read_also: "Читайте также",
    read_more: "Читать далее",
    not_found_title: "Страница не найдена",
    not_found_text: "Такой статьи нет.",
};

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

impl Labels {
    /// Labels for a language tag (`ru`, `ru-RU`, `en`, ...); English otherwise
    pub fn for_language(language: &str) -> Self {
        if is_russian(language) { RU } else { EN }
    }
}

/// Long human-readable date: `15 января 2024 г.` or `January 15, 2024`
pub fn format_date(date: NaiveDate, language: &str) -> String {
    if is_russian(language) {
        format!(
            "{} {} {} г.",
            date.day(),
            RU_MONTHS_GENITIVE[date.month0() as usize],
            date.year()
        )
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}

fn is_russian(language: &str) -> bool {
    let primary = language.split(['-', '_']).next().unwrap_or("");
    primary.eq_ignore_ascii_case("ru")
}
