mod helpers;

mod checkout_test;
mod item_test;
mod transaction_test;
mod vendor_test;
