/// Экспорт видимых строк списка в CSV (открывается в Excel)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const SEPARATOR: char = ';';

/// Trait для строк, которые можно выгрузить в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения ячеек в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the file body: UTF-8 BOM, header line, one line per row
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let mut csv_content = String::new();
    // BOM, чтобы Excel распознал UTF-8
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = T::headers().into_iter().map(escape_csv_cell).collect();
    csv_content.push_str(&headers.join(&SEPARATOR.to_string()));
    csv_content.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(&SEPARATOR.to_string()));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Выгружает строки в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv_content = build_csv(data)?;
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Скачивание через временную ссылку `<a download>`
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), format!("{:.2}", self.amount)]
        }
    }

    #[test]
    fn test_build_csv() {
        let rows = vec![
            Row { name: "Steel Beams", amount: 12500.0 },
            Row { name: "Cement; grey", amount: 80.5 },
            Row { name: "6\" pipe", amount: 1.0 },
        ];
        let csv = build_csv(&rows).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(lines[0], "Name;Amount");
        assert_eq!(lines[1], "Steel Beams;12500.00");
        assert_eq!(lines[2], "\"Cement; grey\";80.50");
        assert_eq!(lines[3], "\"6\"\" pipe\";1.00");
    }

    #[test]
    fn test_empty_export_is_rejected() {
        let rows: Vec<Row> = Vec::new();
        assert!(build_csv(&rows).is_err());
    }
}
