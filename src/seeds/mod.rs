pub mod membership_seed;
