//! Interactive terminal session.
//!
//! Greets the user, asks for a search phrase, runs the search pipeline and
//! then filters saved vacancies by the salary the user expects. Input and
//! output are injected so the whole dialogue can be driven from tests.

use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::pipeline::run_search;
use crate::store::VacancyStore;
use crate::vacancy::VacancySource;

pub async fn run_interactive<R, W, S, T>(
    input: &mut R,
    output: &mut W,
    source: &S,
    store: &T,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    S: VacancySource + Sync + ?Sized,
    T: VacancyStore + ?Sized,
{
    let name = capitalize(&prompt(input, output, "Введите ваше имя: ")?);

    let greeting = format!(
        "{}, добро пожаловать в приложение для поиска работы!\n\
         Здесь я помогу найти тебе работу на платформе HH.ru\n\
         Введи свой запрос, а я попытаюсь что-то для тебя найти: ",
        name
    );
    let text = prompt(input, output, &greeting)?;

    let summary = run_search(source, store, &text).await?;

    writeln!(output, "По вашему запросу найдено {} вакансий!", summary.saved)?;
    let threshold = loop {
        let raw = prompt(input, output, "Введите ожидаемую зарплату: ")?;
        match raw.parse::<i64>() {
            Ok(value) => break value,
            Err(_) => writeln!(output, "Зарплата должна быть целым числом.")?,
        }
    };

    let outcome = store.query_by_min_salary(threshold)?;
    writeln!(output, "{}", outcome)?;
    Ok(())
}

/// Print `message` and read one trimmed line. End of input is an error.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String, AppError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Input("input closed before a value was entered".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    use crate::services::mock_hh::{make_record, MockVacancySource};
    use crate::store::JsonVacancyStore;
    use crate::vacancy::salary::ComparableSalary;

    fn source() -> MockVacancySource {
        MockVacancySource::new().with_records(vec![
            make_record(1, ComparableSalary::Single(100)),
            make_record(2, ComparableSalary::Range(50, 80)),
            make_record(3, ComparableSalary::Single(200)),
        ])
    }

    async fn run_dialogue(script: &str) -> (Result<(), AppError>, String, MockVacancySource) {
        let dir = tempdir().unwrap();
        let store = JsonVacancyStore::new(dir.path().join("vacancies.json"));
        let source = source();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        let result = run_interactive(&mut input, &mut output, &source, &store).await;
        (result, String::from_utf8(output).unwrap(), source)
    }

    #[test]
    fn capitalize_handles_cyrillic() {
        assert_eq!(capitalize("иВАН"), "Иван");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn dialogue_prints_matching_vacancies() {
        let (result, output, source) = run_dialogue("анна\nrust developer\n90\n").await;

        result.unwrap();
        assert_eq!(source.queries(), vec!["rust developer".to_string()]);
        assert!(output.contains("Анна, добро пожаловать"));
        assert!(output.contains("По вашему запросу найдено 3 вакансий!"));
        assert!(output.contains("Vacancy 1\n"));
        assert!(output.contains("Vacancy 3\n"));
        assert!(!output.contains("Vacancy 2\n"));
    }

    #[tokio::test]
    async fn dialogue_reports_not_found() {
        let (result, output, _) = run_dialogue("anna\nrust\n1000\n").await;

        result.unwrap();
        assert!(output.contains("Вакансий с зп от 1000 не найдено."));
    }

    #[tokio::test]
    async fn dialogue_reprompts_on_invalid_salary() {
        let (result, output, _) = run_dialogue("anna\nrust\nмного\n150\n").await;

        result.unwrap();
        assert!(output.contains("Зарплата должна быть целым числом."));
        assert!(output.contains("Vacancy 3\n"));
    }

    #[tokio::test]
    async fn dialogue_fails_when_input_ends_early() {
        let (result, _, _) = run_dialogue("anna\n").await;

        assert!(matches!(result, Err(AppError::Input(_))));
    }
}
