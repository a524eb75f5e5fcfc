use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Destination {
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub image: &'static str,
}

pub const CATALOG: [Destination; 6] = [
    Destination { id: 1, name: "Rome, Italy", price: "$5.42k", duration: "10 Days Trip", image: "/public/img/dest/dest1.jpg" },
    Destination { id: 2, name: "London, UK", price: "$4.2k", duration: "12 Days Trip", image: "/public/img/dest/dest2.jpg" },
    Destination { id: 3, name: "Full Europe", price: "$15k", duration: "28 Days Trip", image: "/public/img/dest/dest3.jpg" },
    Destination { id: 4, name: "Bali, Indonesia", price: "$3.8k", duration: "7 Days Trip", image: "/public/img/dest/dest4.jpg" },
    Destination { id: 5, name: "Paris, France", price: "$6.5k", duration: "14 Days Trip", image: "/public/img/dest/dest5.jpg" },
    Destination { id: 6, name: "Tokyo, Japan", price: "$7k", duration: "9 Days Trip", image: "/public/img/dest/dest6.jpg" },
];

/// Up to `n` distinct catalog entries in random order.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Destination> {
    CATALOG.choose_multiple(rng, n).copied().collect()
}
