/// Parser for leading flags
///
/// Flags are only read before the first function token. Everything from there on is handed to the
/// function compiler untouched, since "-" is a valid function argument.
pub struct Parser {
    flags: Vec<Flag>,
    accept_flag_option: bool,
    start_index: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            flags: vec![],
            accept_flag_option: false,
            start_index: 0,
        }
    }

    /// Index of the first function token in the parsed source
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn parse_from_vec(&mut self, source: &[impl AsRef<str>]) -> Vec<Flag> {
        self.flags.clear();
        self.accept_flag_option = false;
        self.start_index = source.len();
        for (index, item) in source.iter().enumerate() {
            match self.find_word_variant(item.as_ref()) {
                WordVariant::Flag => (),
                WordVariant::EarlyExit => {
                    self.start_index = index + 1;
                    break;
                }
                WordVariant::Function => {
                    self.start_index = index;
                    break;
                }
            }
        }
        std::mem::take(&mut self.flags)
    }

    /// Check word variant
    fn find_word_variant(&mut self, word: &str) -> WordVariant {
        if self.accept_flag_option {
            if let Some(flag) = self.flags.last_mut() {
                flag.option = word.to_string();
            }
            self.accept_flag_option = false;
            return WordVariant::Flag;
        }

        let flag = Self::match_word(word);
        if flag.ftype == FlagType::None {
            return WordVariant::Function;
        }

        if flag.early_exit {
            self.flags = vec![flag];
            return WordVariant::EarlyExit;
        }

        if flag.need_option {
            self.accept_flag_option = true;
        }
        self.flags.push(flag);
        WordVariant::Flag
    }

    fn match_word(word: &str) -> Flag {
        match word.trim() {
            "--version" | "-v" => Flag::version(),
            "--help" | "-h" => Flag::help(),
            "--delimiter" | "-d" => Flag::delimiter(),
            _ => Flag::empty(),
        }
    }
}

enum WordVariant {
    Flag,
    EarlyExit,
    Function,
}

#[derive(Debug)]
pub struct Flag {
    pub ftype: FlagType,
    pub need_option: bool,
    pub option: String,
    pub early_exit: bool,
}

impl Flag {
    pub fn empty() -> Self {
        Self {
            ftype: FlagType::None,
            need_option: false,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn delimiter() -> Self {
        Self {
            ftype: FlagType::Delimiter,
            need_option: true,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn version() -> Self {
        Self {
            ftype: FlagType::Version,
            need_option: false,
            option: String::new(),
            early_exit: true,
        }
    }

    pub fn help() -> Self {
        Self {
            ftype: FlagType::Help,
            need_option: false,
            option: String::new(),
            early_exit: true,
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum FlagType {
    Delimiter,
    Help,
    Version,
    None,
}
