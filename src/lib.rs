pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
}

pub mod modules {
    pub mod standings {
        pub mod core {
            pub mod member;
            pub mod ordering;
            pub mod overrides;
            pub mod raw;
        }
        pub mod use_cases {
            pub mod transform_standings {
                pub mod handler;
                pub mod project;
                pub mod rank;
                pub mod score;
            }
            pub mod summarize_standings {
                pub mod daily_results;
                pub mod medals;
                pub mod report;
                pub mod series;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod leaderboard_file;
            }
        }
    }
}

pub mod shell;
