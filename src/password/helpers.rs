
/// Highest atomic number considered by the periodic table rule (calcium).
const MAX_ATOMIC_NUMBER: u32 = 20;

/// Get the symbols of all light elements (hydrogen to calcium) that appear anywhere in the string.
/// Overlapping matches all count, so "He" yields both "H" and "He".
pub fn get_elements(string: &str) -> Vec<&'static periodic_table::Element> {
    periodic_table::periodic_table()
        .iter()
        .filter(|e| e.atomic_number <= MAX_ATOMIC_NUMBER)
        .filter(|e| string.contains(e.symbol))
        .copied()
        .collect()
}

/// Get all ASCII digits in a string.
pub fn get_digits(string: &str) -> Vec<u32> {
    string.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Value of a single roman numeral letter.
fn roman_value(ch: char) -> Option<i64> {
    match ch {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Total every roman numeral letter in the string as though they formed a single numeral,
/// regardless of what sits between them. A letter smaller than its successor is subtracted.
/// Returns None if there are no roman numeral letters at all.
pub fn get_roman_total(string: &str) -> Option<i64> {
    let values = string.chars().filter_map(roman_value).collect::<Vec<i64>>();
    if values.is_empty() {
        return None;
    }

    let mut total = 0;
    for (i, current) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if current < next => total -= current,
            _ => total += current,
        }
    }
    Some(total)
}

/// Does the string contain a palindrome at least `min_length` UTF-16 code units long?
/// Code units are compared one by one, so a surrogate pair only mirrors itself when the
/// pair repeats. Trimming both ends of a longer palindrome leaves a shorter one, so only
/// windows of `min_length` and `min_length + 1` need checking.
pub fn contains_palindrome(string: &str, min_length: usize) -> bool {
    if min_length == 0 {
        return true;
    }
    let units = string.encode_utf16().collect::<Vec<u16>>();
    [min_length, min_length + 1].iter().any(|size| {
        units
            .windows(*size)
            .any(|window| window.iter().eq(window.iter().rev()))
    })
}
