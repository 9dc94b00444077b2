pub mod optimizer;

pub use optimizer::{
    route_score, score, BestPrice, ItemQuote, RouteScore, ShoppingAnalysis,
};
