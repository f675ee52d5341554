pub mod p200_revenue_register;
