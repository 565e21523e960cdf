/// One of the two player slots. Pieces on the board record the seat that
/// owns them; the seat maps back to the configured player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// The two players of a game, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players<P> {
    seats: [P; 2],
}

impl<P> Players<P> {
    pub fn new(first: P, second: P) -> Self {
        Players {
            seats: [first, second],
        }
    }

    pub fn get(&self, seat: Seat) -> &P {
        &self.seats[seat.index()]
    }

    pub fn first(&self) -> &P {
        self.get(Seat::First)
    }

    pub fn second(&self) -> &P {
        self.get(Seat::Second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_players_by_seat() {
        let players = Players::new("red", "yellow");
        assert_eq!(*players.get(Seat::First), "red");
        assert_eq!(*players.get(Seat::Second), "yellow");
        assert_eq!(*players.first(), "red");
        assert_eq!(*players.second(), "yellow");
    }

    #[test]
    fn test_identical_identifiers_keep_separate_seats() {
        let players = Players::new("blue", "blue");
        assert_eq!(players.get(Seat::First), players.get(Seat::Second));
        assert_ne!(Seat::First, Seat::Second);
    }
}
