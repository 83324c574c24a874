use crate::inifile::{COMMON_SECTION, IniFile};

type Setter<T> = Box<dyn Fn(&IniFile, &mut T)>;

/// A statically-typed description of how configuration values land on the
/// fields of a destination type.
///
/// Each registration pairs a (section, key, kind) triple with a setter
/// closure. `apply` resolves every triple through the typed getters, so a
/// missing or unparsable value sets the kind's zero value instead of
/// failing; binding itself cannot fail.
///
/// Top-level registrations read from the common section. `section` scopes a
/// group of registrations to a named section; the scoped
/// [`SectionBinder`] offers no further `section` method, so bindings nest
/// at most one level deep.
///
/// ```
/// use inicfg::{Binder, parse_ini};
///
/// #[derive(Default)]
/// struct Config {
///     name: String,
///     host: String,
/// }
///
/// let ini = parse_ini(b"name = app\n[db]\nhost = localhost\n");
/// let config = Binder::new()
///     .str_field("name", |c: &mut Config, v| c.name = v)
///     .section("db", |s| s.str_field("host", |c, v| c.host = v))
///     .bind(&ini);
/// assert_eq!(config.host, "localhost");
/// ```
pub struct Binder<T> {
    setters: Vec<Setter<T>>,
}

impl<T> Binder<T> {
    pub fn new() -> Self {
        Self {
            setters: Vec::new(),
        }
    }

    /// Bind a string field from the common section.
    pub fn str_field(mut self, key: &str, set: impl Fn(&mut T, String) + 'static) -> Self {
        self.setters.push(str_setter(COMMON_SECTION, key, set));
        self
    }

    /// Bind a boolean field from the common section.
    pub fn bool_field(mut self, key: &str, set: impl Fn(&mut T, bool) + 'static) -> Self {
        self.setters.push(bool_setter(COMMON_SECTION, key, set));
        self
    }

    /// Bind a signed integer field from the common section.
    pub fn i64_field(mut self, key: &str, set: impl Fn(&mut T, i64) + 'static) -> Self {
        self.setters.push(i64_setter(COMMON_SECTION, key, set));
        self
    }

    /// Bind an unsigned integer field from the common section.
    pub fn u64_field(mut self, key: &str, set: impl Fn(&mut T, u64) + 'static) -> Self {
        self.setters.push(u64_setter(COMMON_SECTION, key, set));
        self
    }

    /// Bind a floating point field from the common section.
    pub fn f64_field(mut self, key: &str, set: impl Fn(&mut T, f64) + 'static) -> Self {
        self.setters.push(f64_setter(COMMON_SECTION, key, set));
        self
    }

    /// Scope a group of field bindings to `[name]`.
    pub fn section(
        mut self,
        name: &str,
        build: impl FnOnce(SectionBinder<T>) -> SectionBinder<T>,
    ) -> Self {
        let scoped = build(SectionBinder {
            section: name.to_string(),
            setters: Vec::new(),
        });
        self.setters.extend(scoped.setters);
        self
    }

    /// Run every registered setter against `target`.
    ///
    /// Every registered field is written, so absent configuration overwrites
    /// prior contents of `target` with zero values.
    pub fn apply(&self, ini: &IniFile, target: &mut T) {
        for set in &self.setters {
            set(ini, target);
        }
    }

    /// Bind onto a freshly defaulted value.
    pub fn bind(&self, ini: &IniFile) -> T
    where
        T: Default,
    {
        let mut target = T::default();
        self.apply(ini, &mut target);
        target
    }
}

impl<T> Default for Binder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Field registrations scoped to one named section. Created by
/// [`Binder::section`]; deliberately offers no `section` of its own.
pub struct SectionBinder<T> {
    section: String,
    setters: Vec<Setter<T>>,
}

impl<T> SectionBinder<T> {
    pub fn str_field(mut self, key: &str, set: impl Fn(&mut T, String) + 'static) -> Self {
        self.setters.push(str_setter(&self.section, key, set));
        self
    }

    pub fn bool_field(mut self, key: &str, set: impl Fn(&mut T, bool) + 'static) -> Self {
        self.setters.push(bool_setter(&self.section, key, set));
        self
    }

    pub fn i64_field(mut self, key: &str, set: impl Fn(&mut T, i64) + 'static) -> Self {
        self.setters.push(i64_setter(&self.section, key, set));
        self
    }

    pub fn u64_field(mut self, key: &str, set: impl Fn(&mut T, u64) + 'static) -> Self {
        self.setters.push(u64_setter(&self.section, key, set));
        self
    }

    pub fn f64_field(mut self, key: &str, set: impl Fn(&mut T, f64) + 'static) -> Self {
        self.setters.push(f64_setter(&self.section, key, set));
        self
    }
}

fn str_setter<T>(
    section: &str,
    key: &str,
    set: impl Fn(&mut T, String) + 'static,
) -> Setter<T> {
    let (section, key) = (section.to_string(), key.to_string());
    Box::new(move |ini, target| set(target, ini.get_str(&section, &key, "").to_string()))
}

fn bool_setter<T>(section: &str, key: &str, set: impl Fn(&mut T, bool) + 'static) -> Setter<T> {
    let (section, key) = (section.to_string(), key.to_string());
    Box::new(move |ini, target| set(target, ini.get_bool(&section, &key, false)))
}

fn i64_setter<T>(section: &str, key: &str, set: impl Fn(&mut T, i64) + 'static) -> Setter<T> {
    let (section, key) = (section.to_string(), key.to_string());
    Box::new(move |ini, target| set(target, ini.get_i64(&section, &key, 0)))
}

// Unsigned fields read through the signed getter and re-cast.
fn u64_setter<T>(section: &str, key: &str, set: impl Fn(&mut T, u64) + 'static) -> Setter<T> {
    let (section, key) = (section.to_string(), key.to_string());
    Box::new(move |ini, target| set(target, ini.get_i64(&section, &key, 0) as u64))
}

fn f64_setter<T>(section: &str, key: &str, set: impl Fn(&mut T, f64) + 'static) -> Setter<T> {
    let (section, key) = (section.to_string(), key.to_string());
    Box::new(move |ini, target| set(target, ini.get_f64(&section, &key, 0.0)))
}
