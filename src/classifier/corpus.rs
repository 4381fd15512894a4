/// Class-level corpus statistics used as the base of the IDF calculation.
///
/// Each class acts as one "document" here: for every vocabulary index the
/// corpus tracks how many classes contain the term at least once.
#[derive(Debug, Clone, Default)]
pub struct ClassCorpus {
    /// number of registered classes
    class_num: u64,
    /// classes containing term, indexed by vocabulary index
    class_freq: Vec<u64>,
    /// bumped on every change
    /// for update notify
    gen_num: u64,
}

impl ClassCorpus {
    pub fn new(class_num: usize) -> Self {
        Self {
            class_num: class_num as u64,
            class_freq: Vec::new(),
            gen_num: 0,
        }
    }

    /// Record that a class contains the term at `idx` for the first time
    pub fn add_class_term(&mut self, idx: usize) {
        if idx >= self.class_freq.len() {
            self.class_freq.resize(idx + 1, 0);
        }
        self.class_freq[idx] += 1;
    }

    /// Mark a training step so cached weights know they are stale
    pub fn touch(&mut self) {
        self.gen_num += 1;
    }

    pub fn get_class_num(&self) -> u64 {
        self.class_num
    }

    /// Number of classes containing the term at `idx`
    pub fn get_class_freq(&self, idx: usize) -> u64 {
        self.class_freq.get(idx).copied().unwrap_or(0)
    }

    pub fn get_gen_num(&self) -> u64 {
        self.gen_num
    }
}
