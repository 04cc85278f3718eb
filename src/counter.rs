/// Count-up animation for a stat label such as `"10,000+"`.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    target: u64,
    plus: bool,
    increment: f64,
    current: f64,
}

impl StatCounter {
    pub fn new(label: &str, duration_ms: u32, tick_ms: u32) -> Self {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse().unwrap_or(0);
        let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Self {
            target,
            plus: label.contains('+'),
            increment: target as f64 / ticks,
            current: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target as f64
    }

    /// Advances one frame and returns the text to show.
    pub fn tick(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
        }
        self.display()
    }

    pub fn display(&self) -> String {
        let mut text = group_thousands(self.current.floor() as u64);
        if self.plus {
            text.push('+');
        }
        text
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn counts_up_to_exact_target_with_suffix() {
        let mut counter = StatCounter::new("10,000+", 1_200, 16);
        let mut last = String::new();
        let mut frames = 0;
        while !counter.is_finished() {
            last = counter.tick();
            frames += 1;
            assert!(frames <= 80, "counter never finished");
        }
        assert_eq!(last, "10,000+");
        assert!(frames >= 75);
    }

    #[test]
    fn intermediate_frames_are_floored() {
        let mut counter = StatCounter::new("15+", 1_200, 16);
        assert_eq!(counter.tick(), "0+");
        // ~2.2 after eleven frames
        for _ in 0..10 {
            counter.tick();
        }
        assert_eq!(counter.display(), "2+");
    }

    #[test]
    fn label_without_digits_finishes_immediately() {
        let counter = StatCounter::new("many", 1_200, 16);
        assert!(counter.is_finished());
        assert_eq!(counter.display(), "0");
    }
}
