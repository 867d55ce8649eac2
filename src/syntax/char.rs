pub trait ScanByteExt {
    fn is_blank(self) -> bool;
    fn is_identifier_byte(self) -> bool;
    fn is_decimal_digit(self) -> bool;
}

impl ScanByteExt for u8 {
    fn is_blank(self) -> bool {
        match self {
            b' ' | b'\t' | b'\n' | b'\r' => true,
            _ => false,
        }
    }

    fn is_identifier_byte(self) -> bool {
        match self {
            b'_' => true,
            b => b.is_ascii_alphabetic(),
        }
    }

    fn is_decimal_digit(self) -> bool {
        self.is_ascii_digit()
    }
}
