pub mod application {
    pub mod meal {
        pub mod resolve;
    }
    pub mod shopping {
        pub mod aggregate_demand;
        pub mod allocate_cooking_groups;
        pub mod context;
        pub mod group_by_category;
        pub mod plan_purchases;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod event {
        pub mod model;
        pub mod repository;
    }
    pub mod ingredient {
        pub mod conversion;
        pub mod formatting;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod meal {
        pub mod model;
        pub mod repository;
    }
    pub mod participant {
        pub mod errors;
        pub mod model;
        pub mod portion;
        pub mod repository;
    }
    pub mod shopping {
        pub mod accumulator;
        pub mod category;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod scheduler;
        pub mod settings;
        pub mod use_cases {
            pub mod aggregate_demand;
            pub mod allocate_cooking_groups;
            pub mod group_by_category;
            pub mod plan_purchases;
        }
    }
}
