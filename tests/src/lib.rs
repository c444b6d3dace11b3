#[cfg(test)]
mod cart;
#[cfg(test)]
mod notification;
#[cfg(test)]
mod utils;
