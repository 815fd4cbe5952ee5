pub mod application {
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod product {
        pub mod category_resolver;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_all_simple;
        pub mod get_by_id;
        pub mod quote;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod pagination;
        pub mod validation;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod quotation;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_all_simple;
            pub mod get_by_id;
            pub mod quote;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
