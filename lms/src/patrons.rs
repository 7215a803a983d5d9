pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;

pub const INVALID_PATRON_ID: &str = "Invalid patron ID. Must be exactly 6 digits.";
const PATRON_ID_LEN: usize = 6;

// patron ids are exactly six ASCII digits, anything else is rejected before any lookup
pub fn is_valid_patron_id(patron_id: &str) -> bool {
    patron_id.len() == PATRON_ID_LEN && patron_id.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use crate::patrons::is_valid_patron_id;

    #[rstest]
    #[case("123456", true)]
    #[case("000000", true)]
    #[case("12345", false)]
    #[case("1234567", false)]
    #[case("12a456", false)]
    #[case(" 23456", false)]
    #[case("١٢٣٤٥٦", false)]
    #[case("", false)]
    fn test_should_validate_patron_id(#[case] patron_id: &str, #[case] valid: bool) {
        assert_eq!(valid, is_valid_patron_id(patron_id));
    }
}
