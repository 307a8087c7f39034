mod value_coercion;
mod value_printer;

pub use value_coercion::is_valid_literal_value;
pub use value_printer::print_value;

#[cfg(test)]
mod tests;
