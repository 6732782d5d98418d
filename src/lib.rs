// Crate entry point. Declares and exposes modules, no business logic here.
//
// Tests and the demo binary import everything from this crate root.

pub mod modules {
    pub mod checkout {
        pub mod core {
            pub mod order;
            pub mod ports;
        }
        pub mod adapters {
            pub mod payment {
                pub mod bank_transfer;
                pub mod credit_card;
                pub mod qris;
            }
            pub mod notification {
                pub mod email;
            }
        }
        pub mod use_cases {
            pub mod run_checkout {
                pub mod handler;
            }
        }
    }

    pub mod registration {
        pub mod core {
            pub mod ports;
            pub mod registration_data;
        }
        pub mod rules {
            pub mod prerequisite;
            pub mod schedule_conflict;
            pub mod sks_limit;
        }
        pub mod use_cases {
            pub mod validate_registration {
                pub mod handler;
            }
        }
    }
}

pub mod shell {
    pub mod config;
    pub mod demo;
    pub mod logging;
}
