#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub show_entropy: bool,
    pub number: Option<bool>,
    pub lowercase: Option<bool>,
    pub uppercase: Option<bool>,
    pub symbol: Option<bool>,
    pub space: Option<bool>,
    pub custom: Option<String>,
    pub length: Option<f64>,
    pub entropy: Option<f64>,
    pub count: Option<usize>,
    pub config: Option<String>,
}

impl CliFlags {
    /// Overlay explicit flags onto `config`.
    pub fn apply(&self, config: &mut entropass::Config) {
        use entropass::LengthMode;

        let toggles = [
            (self.number, &mut config.number),
            (self.lowercase, &mut config.lowercase),
            (self.uppercase, &mut config.uppercase),
            (self.symbol, &mut config.symbol),
            (self.space, &mut config.space),
        ];
        for (flag, field) in toggles {
            if let Some(on) = flag {
                *field = on;
            }
        }

        if let Some(ref custom) = self.custom {
            config.custom = Some(custom.clone());
        }
        if let Some(len) = self.length {
            config.length_mode = LengthMode::FixedLength;
            config.length_value = len;
        }
        if let Some(bits) = self.entropy {
            config.length_mode = LengthMode::TargetEntropy;
            config.length_value = bits;
        }
    }
}
