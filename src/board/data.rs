//! The standard 40-space board table.
//!
//! Rent rows are listed in `RentTier::ALL` order: the four ownership tiers
//! followed by one to five houses.

use super::space::{GroupId, RentTable, Space, SpaceKind};

/// Number of spaces on the board.
pub const BOARD_SIZE: u8 = 40;

const N: Option<u32> = None;

const fn r(amount: u32) -> Option<u32> {
    Some(amount)
}

const RAILROAD_RENT: RentTable = RentTable::new([r(25), r(50), r(100), r(200), N, N, N, N, N]);

fn property(position: u8, name: &str, group: u8, price: u32, rent: [Option<u32>; 9]) -> Space {
    Space::new(
        position,
        name,
        SpaceKind::Property {
            group: GroupId(group),
            price,
            houses: 0,
        },
        RentTable::new(rent),
    )
}

fn railroad(position: u8, name: &str) -> Space {
    Space::new(position, name, SpaceKind::Railroad { price: 200 }, RAILROAD_RENT)
}

fn utility(position: u8, name: &str, rent: [Option<u32>; 9]) -> Space {
    Space::new(position, name, SpaceKind::Utility { price: 50 }, RentTable::new(rent))
}

fn fixed(position: u8, name: &str, kind: SpaceKind, amount: u32) -> Space {
    Space::new(position, name, kind, RentTable::flat(amount))
}

/// Build the standard board in position order.
#[rustfmt::skip]
pub fn standard_spaces() -> Vec<Space> {
    vec![
        fixed(1, "Go", SpaceKind::Go, 0),
        property(2, "Mediterranean Avenue", 1, 60, [r(2), r(4), N, N, r(10), r(30), r(90), r(160), r(250)]),
        fixed(3, "Community Chest", SpaceKind::Card, 0),
        property(4, "Baltic Avenue", 1, 60, [r(4), r(8), N, N, r(20), r(60), r(180), r(320), r(450)]),
        Space::new(5, "Income Tax", SpaceKind::Tax, RentTable::new([r(200), r(200), r(200), r(200), N, N, N, N, N])),
        railroad(6, "Reading Railroad"),
        property(7, "Oriental Avenue", 2, 100, [r(6), r(6), r(12), N, r(30), r(90), r(270), r(400), r(550)]),
        fixed(8, "Chance", SpaceKind::Card, 0),
        property(9, "Vermont Avenue", 2, 100, [r(6), r(6), r(12), N, r(30), r(90), r(270), r(400), r(550)]),
        property(10, "Connecticut Avenue", 2, 120, [r(8), r(8), r(16), N, r(40), r(100), r(300), r(450), r(600)]),
        fixed(11, "Jail", SpaceKind::Jail, 0),
        property(12, "St. Charles Place", 3, 140, [r(10), r(10), r(20), N, r(50), r(150), r(450), r(625), r(750)]),
        utility(13, "Electric Company", [r(100), r(100), N, N, N, N, N, N, N]),
        property(14, "States Avenue", 3, 140, [r(10), r(10), r(20), N, r(50), r(150), r(450), r(625), r(750)]),
        property(15, "Virginia Avenue", 3, 160, [r(12), r(12), r(24), N, r(60), r(180), r(500), r(700), r(900)]),
        railroad(16, "Pennsylvania Railroad"),
        property(17, "St. James Place", 4, 180, [r(14), r(14), r(28), N, r(70), r(200), r(550), r(750), r(950)]),
        fixed(18, "Community Chest", SpaceKind::Card, 0),
        property(19, "Tennessee Avenue", 4, 180, [r(14), r(14), r(28), N, r(70), r(200), r(550), r(750), r(950)]),
        property(20, "New York Avenue", 4, 200, [r(16), r(16), r(32), N, r(80), r(220), r(600), r(800), r(1000)]),
        fixed(21, "Free Parking", SpaceKind::FreeParking, 0),
        property(22, "Kentucky Avenue", 5, 220, [r(18), r(18), r(26), N, r(90), r(250), r(700), r(875), r(1050)]),
        fixed(23, "Chance", SpaceKind::Card, 0),
        property(24, "Indiana Avenue", 5, 220, [r(18), r(18), r(36), N, r(90), r(250), r(700), r(875), r(1050)]),
        property(25, "Illinois Avenue", 5, 240, [r(20), r(20), r(40), N, r(100), r(300), r(750), r(925), r(1100)]),
        railroad(26, "B. & O. Railroad"),
        property(27, "Atlantic Avenue", 6, 260, [r(22), r(22), r(44), N, r(110), r(330), r(800), r(975), r(1150)]),
        property(28, "Ventnor Avenue", 6, 260, [r(22), r(22), r(44), N, r(110), r(330), r(800), r(975), r(1150)]),
        utility(29, "Water Works", [r(40), r(100), N, N, N, N, N, N, N]),
        property(30, "Marvin Gardens", 6, 280, [r(24), r(24), r(48), N, r(120), r(360), r(850), r(1025), r(1200)]),
        fixed(31, "Go to Jail", SpaceKind::GoToJail, 0),
        property(32, "Pacific Avenue", 7, 300, [r(26), r(26), r(52), N, r(130), r(390), r(900), r(1100), r(1275)]),
        property(33, "North Carolina Avenue", 7, 300, [r(26), r(26), r(52), N, r(130), r(390), r(900), r(1100), r(1275)]),
        fixed(34, "Community Chest", SpaceKind::Card, 0),
        property(35, "Pennsylvania Avenue", 7, 320, [r(28), r(28), r(56), N, r(150), r(450), r(1000), r(1200), r(1400)]),
        railroad(36, "Short Line Railroad"),
        fixed(37, "Chance", SpaceKind::Card, 0),
        property(38, "Park Place", 8, 350, [r(35), r(70), N, N, r(175), r(500), r(1100), r(1300), r(1500)]),
        fixed(39, "Luxury Tax", SpaceKind::Tax, 75),
        property(40, "Boardwalk", 8, 400, [r(50), r(100), N, N, r(200), r(600), r(1400), r(1700), r(2000)]),
    ]
}
