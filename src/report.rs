use crate::aggregator::LanguageStats;

/// The fixed report columns.
const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Renders per-language statistics as an ASCII table with the title
/// embedded in the top border, one data row per language in input order.
pub fn render(title: &str, stats: &[(String, LanguageStats)]) -> String {
    let mut rows = vec![HEADERS.map(String::from)];
    for (language, stat) in stats {
        rows.push([
            language.clone(),
            stat.vacancies_found.to_string(),
            stat.vacancies_processed.to_string(),
            stat.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border(&widths);
    let mut table = overlay_title(&border, title);
    table.push('\n');
    for (i, row) in rows.iter().enumerate() {
        for (width, cell) in widths.iter().zip(row) {
            table.push_str("| ");
            table.push_str(cell);
            table.extend(std::iter::repeat(' ').take(width - cell.chars().count() + 1));
        }
        table.push_str("|\n");
        // A separator under the header row only.
        if i == 0 {
            table.push_str(&border);
            table.push('\n');
        }
    }
    table.push_str(&border);
    table
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat('-').take(width + 2));
        line.push('+');
    }
    line
}

/// Writes the title over the border, starting after the leading `+`.
fn overlay_title(border: &str, title: &str) -> String {
    let mut chars = border.chars().collect::<Vec<_>>();
    for (i, c) in title.chars().enumerate() {
        if i + 2 < chars.len() {
            chars[i + 1] = c;
        }
    }
    chars.into_iter().collect()
}
