mod customers;
mod helpers;
