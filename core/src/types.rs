/// One benchmark row: an integer identifier and a finite floating-point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub id: i64,
    pub value: f64,
}

impl Record {
    pub fn new(id: i64, value: f64) -> Self {
        Record { id, value }
    }
}
