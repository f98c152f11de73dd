/// Format a backend decimal string as a BRL price label.
/// The API serializes `preco` as a string ("9.9", "12.00"); anything that
/// fails to parse is shown as-is rather than hidden.
pub fn format_price(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(value) => format!("R$ {:.2}", value),
        Err(_) => format!("R$ {}", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_price("9.9"), "R$ 9.90");
        assert_eq!(format_price("12"), "R$ 12.00");
    }

    #[test]
    fn keeps_unparseable_input_visible() {
        assert_eq!(format_price("abc"), "R$ abc");
    }
}
