pub mod gradient_ring;
