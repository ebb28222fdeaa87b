use super::constants::STAT_DURATION_MS;

/// Displayed stat text split around its first embedded integer.
///
/// `"~1,234 satellites"` becomes prefix `"~"`, target `1234` and suffix
/// `" satellites"`. The integer starts at the first ASCII digit and runs over
/// digits and thousands separators; trailing separators stay in the suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterText {
    pub prefix: String,
    pub target: u64,
    pub suffix: String,
}

impl CounterText {
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let run_len = text[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == ','))
            .unwrap_or(text.len() - start);
        let run = text[start..start + run_len].trim_end_matches(',');
        let end = start + run.len();
        let digits: String = run.chars().filter(|c| *c != ',').collect();
        let target = digits.parse::<u64>().ok()?;
        Some(Self {
            prefix: text[..start].to_string(),
            target,
            suffix: text[end..].to_string(),
        })
    }

    /// Text with `value` substituted for the integer.
    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, format_thousands(value), self.suffix)
    }
}

/// Quartic ease-out: fast start, gentle landing.
#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Group digits in threes with `,` (en-US style).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One count-up run from zero to the parsed target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    text: CounterText,
    duration_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

impl CounterAnimation {
    pub fn new(text: CounterText) -> Self {
        Self::with_duration(text, STAT_DURATION_MS)
    }

    pub fn with_duration(text: CounterText, duration_ms: f64) -> Self {
        Self { text, duration_ms }
    }

    #[cfg(test)]
    pub fn target(&self) -> u64 {
        self.text.target
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return self.text.target;
        }
        let eased = ease_out_quart(progress);
        ((self.text.target as f64) * eased).floor() as u64
    }

    pub fn frame_at(&self, elapsed_ms: f64) -> CounterFrame {
        CounterFrame {
            text: self.text.render(self.value_at(elapsed_ms)),
            finished: elapsed_ms >= self.duration_ms,
        }
    }
}
