/// Shortens `text` to `max_chars` characters followed by `...`.
#[must_use]
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_label;

    #[test]
    fn long_labels_are_cut_on_char_boundaries() {
        assert_eq!(truncate_label("Number of Laps", 15), "Number of Laps");
        assert_eq!(
            truncate_label("Transmission failure", 10),
            "Transmissi..."
        );
        assert_eq!(truncate_label("Nürburgring GP", 4), "Nürb...");
    }
}
