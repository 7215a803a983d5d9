pub mod model;

pub trait Book {
    fn title(&self) -> &str;
    fn is_available(&self) -> bool;
}
