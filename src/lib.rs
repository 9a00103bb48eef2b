pub mod sim;
pub mod stats;

#[cfg(test)]
mod test;
