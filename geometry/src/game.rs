use std::cmp::Ordering;
use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use log::{debug, info};
use rand::Rng;

use crate::error::{GeometryError, Result};
use crate::geom::point::Point;
use crate::geom::rectangle::Rectangle;
use crate::geom::shape::Shape;

const PROMPT: &str = "Enter your guess for the area: ";

/// Builds a rectangle with integer corners, lower-left in [1,10]x[1,10] and
/// upper-right in [10,20]x[10,20].
pub fn random_rectangle<R: Rng>(rng: &mut R) -> Rectangle {
    let lowleft = Point::new(
        f64::from(rng.gen_range(1..=10u8)),
        f64::from(rng.gen_range(1..=10u8)),
    );
    let upright = Point::new(
        f64::from(rng.gen_range(10..=20u8)),
        f64::from(rng.gen_range(10..=20u8)),
    );
    Rectangle::new(lowleft, upright)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Correct,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::TooLow => "Too low! Try again.",
            Verdict::TooHigh => "Too high! Try again.",
            Verdict::Correct => "🎉 Correct! You've guessed the area!",
        }
    }
}

#[derive(Debug)]
pub struct Game {
    rectangle: Rectangle,
    answer: f64,
}

impl Game {
    pub fn new(rectangle: Rectangle) -> Self {
        let answer = rectangle.area();
        Game { rectangle, answer }
    }

    pub fn new_random<R: Rng>(rng: &mut R) -> Self {
        Self::new(random_rectangle(rng))
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    pub fn answer(&self) -> f64 {
        self.answer
    }

    pub fn check(&self, guess: i64) -> Verdict {
        self.compare(guess as f64)
    }

    fn compare(&self, guess: f64) -> Verdict {
        match guess.partial_cmp(&self.answer) {
            Some(Ordering::Equal) => Verdict::Correct,
            Some(Ordering::Less) => Verdict::TooLow,
            // a NaN answer can never be guessed
            Some(Ordering::Greater) | None => Verdict::TooHigh,
        }
    }

    /// Runs the console loop until the area is guessed. Returns the number of
    /// numeric guesses taken; lines that do not parse are not counted.
    pub fn play<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<u32> {
        info!(
            "game started lowleft:{} upright:{}",
            self.rectangle.lowleft(),
            self.rectangle.upright()
        );
        writeln!(output, "Welcome to the Rectangle Area Guessing Game!\n")?;
        writeln!(output, "A rectangle has been generated with random dimensions.")?;
        writeln!(output, "Try to guess its area!\n")?;

        let mut attempts = 0;
        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(GeometryError::InputClosed);
            }
            let guess = match parse_guess(line.trim()) {
                Ok(g) => g,
                Err(e) => {
                    debug!("rejected guess {:?}: {}", line.trim(), e);
                    writeln!(output, "Invalid input. Please enter a numeric value.")?;
                    continue;
                }
            };
            attempts += 1;
            let verdict = self.compare(guess);
            debug!("guess {} -> {:?}", guess, verdict);
            writeln!(output, "{}", verdict.message())?;
            if verdict == Verdict::Correct {
                break;
            }
        }
        writeln!(output, "\nGame Over. Thanks for playing!")?;
        info!("area guessed after {} attempts", attempts);
        Ok(attempts)
    }
}

/// Integers outside the i64 range still count as guesses, saturating to an
/// infinite value so they compare past any area.
fn parse_guess(text: &str) -> std::result::Result<f64, ParseIntError> {
    match text.parse::<i64>() {
        Ok(g) => Ok(g as f64),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(f64::INFINITY),
            IntErrorKind::NegOverflow => Ok(f64::NEG_INFINITY),
            _ => Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::error::GeometryError;
    use crate::game::{parse_guess, random_rectangle, Game, Verdict};
    use crate::geom::point::Point;
    use crate::geom::rectangle::Rectangle;

    fn fixed_game() -> Game {
        // area 12 * 10 = 120
        Game::new(Rectangle::new(Point::new(3.0, 5.0), Point::new(15.0, 15.0)))
    }

    fn run(game: &Game, input: &str) -> (crate::error::Result<u32>, String) {
        let mut out = Vec::new();
        let res = game.play(Cursor::new(input), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_random_rectangle_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let rect = random_rectangle(&mut rng);
            let (ll, ur) = (rect.lowleft(), rect.upright());
            assert!((1.0..=10.0).contains(&ll.x()) && (1.0..=10.0).contains(&ll.y()));
            assert!((10.0..=20.0).contains(&ur.x()) && (10.0..=20.0).contains(&ur.y()));
            assert_eq!(ll.x().fract(), 0.0);
            assert_eq!(ur.y().fract(), 0.0);
        }
    }

    #[test]
    fn test_seeded_games_repeat() {
        let a = Game::new_random(&mut StdRng::seed_from_u64(42));
        let b = Game::new_random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.rectangle(), b.rectangle());
        assert_eq!(a.answer(), b.answer());
    }

    #[test]
    fn test_check() {
        let game = fixed_game();
        assert_eq!(game.answer(), 120.0);
        assert_eq!(game.check(119), Verdict::TooLow);
        assert_eq!(game.check(-5), Verdict::TooLow);
        assert_eq!(game.check(121), Verdict::TooHigh);
        assert_eq!(game.check(120), Verdict::Correct);
    }

    #[test]
    fn test_play_transcript() {
        let game = fixed_game();
        let (res, out) = run(&game, "abc\n50\n 500 \n120\n999\n");
        assert_eq!(res.unwrap(), 3);
        let lines: Vec<&str> = out
            .lines()
            .map(|l| l.trim_start_matches("Enter your guess for the area: "))
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(
            lines,
            vec![
                "Welcome to the Rectangle Area Guessing Game!",
                "A rectangle has been generated with random dimensions.",
                "Try to guess its area!",
                "Invalid input. Please enter a numeric value.",
                "Too low! Try again.",
                "Too high! Try again.",
                "🎉 Correct! You've guessed the area!",
                "Game Over. Thanks for playing!",
            ]
        );
    }

    #[test]
    fn test_check_nan_answer() {
        let game = Game::new(Rectangle::new(
            Point::new(f64::NAN, 0.0),
            Point::new(4.0, 3.0),
        ));
        assert!(game.answer().is_nan());
        assert_eq!(game.check(7), Verdict::TooHigh);
        assert_eq!(game.check(0), Verdict::TooHigh);
        assert_eq!(game.check(-7), Verdict::TooHigh);
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("+42").unwrap(), 42.0);
        assert_eq!(parse_guess("99999999999999999999").unwrap(), f64::INFINITY);
        assert_eq!(
            parse_guess("-99999999999999999999").unwrap(),
            f64::NEG_INFINITY
        );
        assert!(parse_guess("").is_err());
        assert!(parse_guess("12a").is_err());
    }

    #[test]
    fn test_play_huge_guesses() {
        let game = fixed_game();
        let (res, out) = run(
            &game,
            "99999999999999999999\n-99999999999999999999\n120\n",
        );
        assert_eq!(res.unwrap(), 3);
        assert!(out.contains("Too high! Try again."));
        assert!(out.contains("Too low! Try again."));
        assert!(!out.contains("Invalid input"));
    }

    #[test]
    fn test_play_rejects_decimal() {
        let game = fixed_game();
        let (res, out) = run(&game, "120.0\n120\n");
        assert_eq!(res.unwrap(), 1);
        assert!(out.contains("Invalid input. Please enter a numeric value."));
    }

    #[test]
    fn test_play_input_closed() {
        let game = fixed_game();
        let (res, out) = run(&game, "1\n2\n");
        assert!(matches!(res, Err(GeometryError::InputClosed)));
        assert_eq!(out.matches("Too low! Try again.").count(), 2);
        assert!(!out.contains("Game Over"));
    }
}
