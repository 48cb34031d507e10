//! Letter-casing primitives shared by the token rules and the line passes

/// Whether `ch` ends a word for [`title_words`].
///
/// ASCII letters, digits and `_` continue a word, any other ASCII character
/// breaks it. Outside ASCII, letters and digits continue a word and only
/// whitespace breaks it, so `’` inside "let’s" does not start a new word.
fn is_word_break(ch: char) -> bool {
    if ch.is_ascii() {
        return !(ch.is_ascii_alphanumeric() || ch == '_');
    }
    if ch.is_alphanumeric() {
        return false;
    }
    ch.is_whitespace()
}

/// Title-case form of a single letter.
///
/// Digraph letters have a distinct title form ("ǆ" → "ǅ"). A letter whose
/// uppercase form is more than one character ("ß") is kept as-is.
pub fn to_title(ch: char) -> char {
    match ch {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        _ => {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        }
    }
}

/// Title-cases the first letter of every word, leaving the rest untouched.
///
/// "'by" → "'By", "o'reilly" → "O'Reilly", "let’s" → "Let’s"
pub fn title_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_break = true;

    for ch in text.chars() {
        if prev_break {
            result.push(to_title(ch));
        } else {
            result.push(ch);
        }
        prev_break = is_word_break(ch);
    }

    result
}

/// Title-cases the first character of `text`, keeping the rest as-is
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => std::iter::once(to_title(first)).chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every apostrophe-delimited segment ("d'artagnan" → "D'Artagnan").
///
/// Both `'` and `‘` delimit segments and are kept in place.
pub fn title_apostrophe_segments(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut segment_start = true;

    for ch in word.chars() {
        if segment_start && ch.is_alphabetic() {
            result.push(to_title(ch));
            segment_start = false;
        } else {
            result.push(ch);
        }
        if ch == '\'' || ch == '‘' {
            segment_start = true;
        }
    }

    result
}
