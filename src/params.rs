use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
enum ParamTy {
    Int(Vec<i32>),
    Float(Vec<f32>),
    Str(Vec<String>)
}

/// The scene parameter dictionary `LSystem::parse` reads `radius`,
/// `stepsize`, `angle`, `radiusscale`, `n`, `axiom` and `rules` from.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSet(HashMap<String, ParamTy>);

impl ParamSet {
    pub fn new() -> ParamSet { ParamSet(HashMap::new()) }

    fn add_param(&mut self, name: &String, data: ParamTy) {
        let &mut ParamSet(ref mut map) = self;
        if let Some(_) = map.insert(name.clone(), data) {
            warn!("param {} already exists, overwriting", name);
        }
    }

    pub fn add_float(&mut self, name: &String, data: Vec<f32>) {
        self.add_param(name, ParamTy::Float(data))
    }

    pub fn find_one_float(&self, name: &String, def: f32) -> f32 {
        let &ParamSet(ref map) = self;
        if let Some(&ParamTy::Float(ref f)) = map.get(name) {
            if f.is_empty() { def } else { f[0] }
        } else {
            def
        }
    }

    pub fn find_float<'a>(&'a self, name: &String) -> Option<&'a [f32]> {
        let &ParamSet(ref map) = self;
        map.get(name).and_then(|res| {
            match res {
                &ParamTy::Float(ref f) => Some(f.as_slice()),
                _ => None
            }
        })
    }

    pub fn add_int(&mut self, name: &String, data: Vec<i32>) {
        self.add_param(name, ParamTy::Int(data))
    }

    pub fn find_one_int(&self, name: &String, def: i32) -> i32 {
        let &ParamSet(ref map) = self;
        if let Some(&ParamTy::Int(ref f)) = map.get(name) {
            if f.is_empty() { def } else { f[0] }
        } else {
            def
        }
    }

    pub fn find_int<'a>(&'a self, name: &String) -> Option<&'a [i32]> {
        let &ParamSet(ref map) = self;
        map.get(name).and_then(|res| {
            match res {
                &ParamTy::Int(ref f) => Some(f.as_slice()),
                _ => None
            }
        })
    }

    pub fn add_str(&mut self, name: &String, data: Vec<String>) {
        self.add_param(name, ParamTy::Str(data))
    }

    pub fn find_one_str(&self, name: &String, def: String) -> String {
        let &ParamSet(ref map) = self;
        if let Some(&ParamTy::Str(ref f)) = map.get(name) {
            if f.is_empty() { def } else { f[0].clone() }
        } else {
            def
        }
    }

    pub fn find_str<'a>(&'a self, name: &String) -> Option<&'a [String]> {
        let &ParamSet(ref map) = self;
        map.get(name).and_then(|res| {
            match res {
                &ParamTy::Str(ref f) => Some(f.as_slice()),
                _ => None
            }
        })
    }
}
