use std::collections::HashMap;

/// Lookup table from variable names to the text that replaces them.
#[derive(Debug, PartialEq)]
pub struct StrSwapTable(HashMap<String, String>);

impl StrSwapTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn add(&mut self, key: &str, value: &str) -> Option<String> {
        self.0.insert(key.to_string(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
}

const L_VAR_DELIMITER: char = '{';
const R_VAR_DELIMITER: char = '}';

/// Performs variable replacement on the given `text`, looking up variables in
/// the `code` to swap with their values.
///
/// The text is walked once from left to right, so swapped-in values are never
/// scanned for variables themselves. Unknown variables are left in place.
pub fn substitute(text: &str, code: &StrSwapTable) -> String {
    let mut result = String::new();

    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        // check if there is a valid variable replacement
        match c {
            L_VAR_DELIMITER => {
                match gather_variable(&mut chars, c, R_VAR_DELIMITER) {
                    Ok(r) => {
                        // remove delimiters and surrounding whitespace to get key name
                        let key = &r[2..r.len() - 2].trim();
                        // look up the key in the code book
                        match code.get(*key) {
                            Some(value) => result.push_str(value),
                            None => result.push_str(&r),
                        }
                    }
                    Err(e) => result.push_str(&e),
                }
            }
            _ => result.push(c),
        }
    }
    result
}

/// Builds a variable following the syntax `c0c0*c_nc_n`.
///
/// Assumes the first token was already consumed and is passed as `c0`.
///
/// Errors if the syntax is not fulfilled.
fn gather_variable<T: Iterator<Item = char>>(
    chars: &mut T,
    c0: char,
    c_n: char,
) -> Result<String, String> {
    let mut var = String::from(c0);
    let mut last: Option<char> = None;
    // verify next character is also `c0`
    if let Some(c) = chars.next() {
        var.push(c);
        if c != c0 {
            return Err(var);
        }
        last = Some(c);
    }
    // collect remaining characters until finding double cN occurrences
    while let Some(c) = chars.next() {
        var.push(c);
        if c == c_n {
            // check if the last char was also `cN`
            if last == Some(c_n) {
                return Ok(var);
            }
        }
        last = Some(c);
    }
    // never was able to close the variable
    Err(var)
}

#[cfg(test)]
mod test {
    use super::*;

    /// Internal helper test `fn` to generate a sample code book for looking up variables.
    fn create_code() -> StrSwapTable {
        let mut code = StrSwapTable::new();
        code.add("entity", "my_register");
        code.add("testbench", "my_register_tb");
        code.add("high_time", "10");
        code
    }

    #[test]
    fn gather_var() {
        let text = "{ variable }}";
        assert_eq!(
            gather_variable(&mut text.chars(), '{', '}'),
            Ok("{{ variable }}".to_owned())
        );

        let text = "{ variable }";
        assert_eq!(
            gather_variable(&mut text.chars(), '{', '}'),
            Err("{{ variable }".to_owned())
        );

        let text = "variable }";
        assert_eq!(
            gather_variable(&mut text.chars(), '{', '}'),
            Err("{v".to_owned())
        );

        let text = "{variable } } ";
        assert_eq!(
            gather_variable(&mut text.chars(), '{', '}'),
            Err("{{variable } } ".to_owned())
        );
    }

    #[test]
    fn replace_variables() {
        let text = "entity {{ testbench }} is\nend {{testbench}};";
        let code = create_code();
        assert_eq!(
            substitute(text, &code),
            "entity my_register_tb is\nend my_register_tb;".to_owned()
        );

        let text = "constant CLK_HIGH_TIME : time := {{  high_time   }} ns; -- {{ unknown }}";
        assert_eq!(
            substitute(text, &code),
            "constant CLK_HIGH_TIME : time := 10 ns; -- {{ unknown }}".to_owned()
        );
    }

    #[test]
    fn values_are_not_rescanned() {
        let mut code = StrSwapTable::new();
        code.add("a", "{{ b }}");
        code.add("b", "oops");
        assert_eq!(substitute("x {{ a }} y", &code), "x {{ b }} y");
    }

    #[test]
    fn idempotent_once_replaced() {
        let code = create_code();
        let once = substitute("component {{ entity }}", &code);
        assert_eq!(substitute(&once, &code), once);
        assert_eq!(once, "component my_register");
    }
}
