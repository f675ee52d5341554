pub mod u101_unify_revenue;
