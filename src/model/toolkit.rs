//! The contract every concrete translator's wrapper type implements.
//!
//! A [`ToolkitModel`] wraps exactly one toolkit-native object together with
//! optional unit metadata, and knows how to build itself from a file or a
//! schema object and how to write itself back out. The wrapped value lives in
//! a [`ToolkitData`], which can only be produced by running the model's
//! [`isvalid`](ToolkitModel::isvalid) check, so every model instance holds
//! valid data.

use std::any;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use super::envelope::{Options, Units};
use crate::error::Result;

/// Toolkit object validated by the model `M`, plus its unit metadata.
///
/// The only constructor is [`validated`](Self::validated), which runs
/// `M::isvalid`. Because the wrapper is typed by the model and not by the
/// data type, data accepted by one model cannot be handed to another model
/// sharing the same native type:
///
/// ```compile_fail
/// # use std::path::Path;
/// # use mmic_translator::{Options, Result, ToolkitData, ToolkitModel};
/// # macro_rules! model {
/// #     ($name:ident) => {
/// #         struct $name(ToolkitData<$name>);
/// #         impl ToolkitModel for $name {
/// #             type Data = Vec<f64>;
/// #             type Schema = ();
/// #             fn engine() -> &'static str { "demo" }
/// #             fn isvalid(data: Vec<f64>) -> Result<Vec<f64>> { Ok(data) }
/// #             fn from_data(data: ToolkitData<Self>) -> Self { Self(data) }
/// #             fn inner(&self) -> &ToolkitData<Self> { &self.0 }
/// #             fn from_file(_: &Path, _: Option<&str>, _: &Options) -> Result<Self> { unimplemented!() }
/// #             fn from_schema(_: &(), _: Option<&str>, _: &Options) -> Result<Self> { unimplemented!() }
/// #             fn to_file(&self, _: &Path, _: Option<&str>, _: &Options) -> Result<()> { unimplemented!() }
/// #             fn to_schema(&self, _: Option<&str>, _: &Options) -> Result<()> { unimplemented!() }
/// #         }
/// #     };
/// # }
/// # model!(Lenient);
/// # model!(Strict);
/// let data = ToolkitData::<Lenient>::validated(vec![], None)?;
/// let strict = Strict::from_data(data);
/// # Ok::<(), mmic_translator::Error>(())
/// ```
pub struct ToolkitData<M: ToolkitModel> {
    data: M::Data,
    units: Option<Units>,
    model: PhantomData<fn() -> M>,
}

impl<M: ToolkitModel> ToolkitData<M> {
    /// Runs `M::isvalid` on `data` and wraps the normalized result.
    pub fn validated(data: M::Data, units: Option<Units>) -> Result<Self> {
        let data = M::isvalid(data)?;
        Ok(Self {
            data,
            units,
            model: PhantomData,
        })
    }

    pub fn data(&self) -> &M::Data {
        &self.data
    }

    pub fn units(&self) -> Option<&Units> {
        self.units.as_ref()
    }

    pub fn into_parts(self) -> (M::Data, Option<Units>) {
        (self.data, self.units)
    }
}

impl<M: ToolkitModel> fmt::Debug for ToolkitData<M>
where
    M::Data: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitData")
            .field("model", &any::type_name::<M>())
            .field("data", &self.data)
            .field("units", &self.units)
            .finish()
    }
}

impl<M: ToolkitModel> Clone for ToolkitData<M>
where
    M::Data: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            units: self.units.clone(),
            model: PhantomData,
        }
    }
}

impl<M: ToolkitModel> PartialEq for ToolkitData<M>
where
    M::Data: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.units == other.units
    }
}

/// Module path of a type name: `a::b::C<x::Y>` → `a::b`.
///
/// Primitive types have no module and report `core`.
pub fn module_of(type_name: &'static str) -> &'static str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    match base.rsplit_once("::") {
        Some((module, _)) => module,
        None => "core",
    }
}

/// Top-level crate of a type name: `mmic_mda::models::Universe` → `mmic_mda`.
pub fn crate_of(type_name: &'static str) -> &'static str {
    type_name.split("::").next().unwrap_or(type_name)
}

/// Wrapper around a toolkit-specific data object.
///
/// Implementors supply the conversion operations and the validity check;
/// construction, accessors and the introspective properties are provided.
pub trait ToolkitModel: Sized {
    /// Toolkit-native object stored by the model.
    type Data;
    /// Canonical schema object the model converts to and from.
    type Schema;

    /// Identifier of the external toolkit this model wraps.
    fn engine() -> &'static str;

    /// Name of the native type held in the data slot.
    fn dtype() -> &'static str {
        any::type_name::<Self::Data>()
    }

    /// Validates and normalizes toolkit data.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation).
    fn isvalid(data: Self::Data) -> Result<Self::Data>;

    /// Wraps data already validated by this model.
    fn from_data(data: ToolkitData<Self>) -> Self;

    fn inner(&self) -> &ToolkitData<Self>;

    /// Constructs a model by parsing `path`.
    ///
    /// `format` overrides the format inferred from the file name. Fails with
    /// [`Error::Parse`](crate::Error::Parse).
    fn from_file(path: &Path, format: Option<&str>, options: &Options) -> Result<Self>;

    /// Constructs a model from a schema object.
    ///
    /// Fails with [`Error::SchemaMismatch`](crate::Error::SchemaMismatch).
    fn from_schema(schema: &Self::Schema, version: Option<&str>, options: &Options)
    -> Result<Self>;

    /// Writes the wrapped data to `path`.
    ///
    /// Fails with [`Error::Write`](crate::Error::Write).
    fn to_file(&self, path: &Path, format: Option<&str>, options: &Options) -> Result<()>;

    /// Converts the wrapped data to a schema object.
    ///
    /// Implementations document which information they drop. Fails with
    /// [`Error::Conversion`](crate::Error::Conversion).
    fn to_schema(&self, version: Option<&str>, options: &Options) -> Result<Self::Schema>;

    fn new(data: Self::Data, units: Option<Units>) -> Result<Self> {
        ToolkitData::<Self>::validated(data, units).map(Self::from_data)
    }

    fn data(&self) -> &Self::Data {
        self.inner().data()
    }

    fn data_units(&self) -> Option<&Units> {
        self.inner().units()
    }

    /// Module that defines the native data type.
    fn toolkit(&self) -> &'static str {
        module_of(any::type_name::<Self::Data>())
    }

    /// Translator crate that declares this model.
    fn translator(&self) -> &'static str {
        crate_of(any::type_name::<Self>())
    }

    fn path(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fmt::Write as _;
    use std::fs;

    #[derive(Debug, Clone, PartialEq)]
    struct Frame {
        symbols: Vec<String>,
        coords: Vec<[f64; 3]>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct MolSchema {
        symbols: Vec<String>,
        geometry: Vec<f64>,
    }

    #[derive(Debug)]
    struct XyzModel {
        inner: ToolkitData<XyzModel>,
    }

    impl ToolkitModel for XyzModel {
        type Data = Frame;
        type Schema = MolSchema;

        fn engine() -> &'static str {
            "xyzkit"
        }

        fn isvalid(mut data: Frame) -> Result<Frame> {
            if data.symbols.is_empty() {
                return Err(Error::Validation("frame has no atoms".into()));
            }
            if data.symbols.len() != data.coords.len() {
                return Err(Error::Validation(format!(
                    "{} symbols but {} coordinates",
                    data.symbols.len(),
                    data.coords.len()
                )));
            }
            for symbol in &mut data.symbols {
                *symbol = symbol.trim().to_string();
            }
            Ok(data)
        }

        fn from_data(inner: ToolkitData<Self>) -> Self {
            Self { inner }
        }

        fn inner(&self) -> &ToolkitData<Self> {
            &self.inner
        }

        fn from_file(path: &Path, format: Option<&str>, _options: &Options) -> Result<Self> {
            if let Some(fmt) = format.filter(|f| !f.eq_ignore_ascii_case("xyz")) {
                return Err(Error::parse(fmt, "xyzkit only reads xyz files"));
            }
            let text = fs::read_to_string(path)?;
            let mut lines = text.lines();
            let count: usize = lines
                .next()
                .and_then(|l| l.trim().parse().ok())
                .ok_or_else(|| Error::parse("xyz", "missing atom count"))?;
            lines.next();

            let mut frame = Frame {
                symbols: Vec::with_capacity(count),
                coords: Vec::with_capacity(count),
            };
            for line in lines.take(count) {
                let mut fields = line.split_whitespace();
                let symbol = fields
                    .next()
                    .ok_or_else(|| Error::parse("xyz", "blank atom line"))?;
                let mut xyz = [0.0; 3];
                for slot in &mut xyz {
                    *slot = fields
                        .next()
                        .and_then(|v| v.parse().ok())
                        .ok_or_else(|| Error::parse("xyz", format!("bad coordinate for {symbol}")))?;
                }
                frame.symbols.push(symbol.to_string());
                frame.coords.push(xyz);
            }
            Self::new(frame, None)
        }

        fn from_schema(schema: &MolSchema, version: Option<&str>, _options: &Options) -> Result<Self> {
            if schema.geometry.len() != 3 * schema.symbols.len() {
                return Err(Error::schema_mismatch(version, "geometry is not 3N long"));
            }
            let coords = schema
                .geometry
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect();
            Self::new(
                Frame {
                    symbols: schema.symbols.clone(),
                    coords,
                },
                None,
            )
        }

        fn to_file(&self, path: &Path, _format: Option<&str>, _options: &Options) -> Result<()> {
            let frame = self.data();
            let mut out = format!("{}\n\n", frame.symbols.len());
            for (symbol, [x, y, z]) in frame.symbols.iter().zip(&frame.coords) {
                let _ = writeln!(out, "{symbol} {x} {y} {z}");
            }
            fs::write(path, out).map_err(|e| Error::write(path.display().to_string(), e.to_string()))
        }

        fn to_schema(&self, _version: Option<&str>, _options: &Options) -> Result<MolSchema> {
            let frame = self.data();
            Ok(MolSchema {
                symbols: frame.symbols.clone(),
                geometry: frame.coords.iter().flatten().copied().collect(),
            })
        }
    }

    /// Shares `Frame` with `XyzModel` but accepts anything.
    #[derive(Debug)]
    struct AnyFrameModel {
        inner: ToolkitData<AnyFrameModel>,
    }

    impl ToolkitModel for AnyFrameModel {
        type Data = Frame;
        type Schema = MolSchema;

        fn engine() -> &'static str {
            "anykit"
        }

        fn isvalid(data: Frame) -> Result<Frame> {
            Ok(data)
        }

        fn from_data(inner: ToolkitData<Self>) -> Self {
            Self { inner }
        }

        fn inner(&self) -> &ToolkitData<Self> {
            &self.inner
        }

        fn from_file(_path: &Path, format: Option<&str>, _options: &Options) -> Result<Self> {
            Err(Error::parse(format.unwrap_or("unknown"), "anykit cannot read files"))
        }

        fn from_schema(_schema: &MolSchema, version: Option<&str>, _options: &Options) -> Result<Self> {
            Err(Error::schema_mismatch(version, "anykit has no schema support"))
        }

        fn to_file(&self, path: &Path, _format: Option<&str>, _options: &Options) -> Result<()> {
            Err(Error::write(path.display().to_string(), "anykit cannot write files"))
        }

        fn to_schema(&self, _version: Option<&str>, _options: &Options) -> Result<MolSchema> {
            Err(Error::Conversion("anykit has no schema support".into()))
        }
    }

    fn water() -> Frame {
        Frame {
            symbols: vec!["O".into(), " H".into(), "H ".into()],
            coords: vec![[0.0, 0.0, 0.0], [0.96, 0.0, 0.0], [-0.24, 0.93, 0.0]],
        }
    }

    #[test]
    fn construction_runs_the_validity_check() {
        let model = XyzModel::new(water(), None).unwrap();
        assert_eq!(model.data().symbols, vec!["O", "H", "H"]);

        let broken = Frame {
            symbols: vec!["O".into()],
            coords: vec![],
        };
        let err = XyzModel::new(broken, None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn wrapped_data_is_checked_by_the_owning_model() {
        let empty = Frame {
            symbols: vec![],
            coords: vec![],
        };

        let loose = ToolkitData::<AnyFrameModel>::validated(empty.clone(), None).unwrap();
        let loose = AnyFrameModel::from_data(loose);
        assert!(loose.data().symbols.is_empty());

        let err = ToolkitData::<XyzModel>::validated(empty, None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let strict = XyzModel::from_data(ToolkitData::<XyzModel>::validated(water(), None).unwrap());
        assert!(XyzModel::isvalid(strict.data().clone()).is_ok());
        assert_eq!(strict.data().symbols, vec!["O", "H", "H"]);
    }

    #[test]
    fn introspective_properties_come_from_types() {
        let mut units = Units::new();
        units.insert("length".into(), "angstrom".into());
        let model = XyzModel::new(water(), Some(units.clone())).unwrap();

        assert_eq!(XyzModel::engine(), "xyzkit");
        assert!(XyzModel::dtype().ends_with("::Frame"));
        assert_eq!(model.toolkit(), "mmic_translator::model::toolkit::tests");
        assert_eq!(model.translator(), "mmic_translator");
        assert!(model.path().ends_with("tests::XyzModel"));
        assert_eq!(model.data_units(), Some(&units));
    }

    #[test]
    fn schema_round_trip_yields_valid_data() {
        let model = XyzModel::new(water(), None).unwrap();
        let schema = model.to_schema(None, &Options::new()).unwrap();
        let back = XyzModel::from_schema(&schema, None, &Options::new()).unwrap();

        assert!(XyzModel::isvalid(back.data().clone()).is_ok());
        assert_eq!(back.data(), model.data());
    }

    #[test]
    fn from_schema_rejects_mismatched_shape() {
        let schema = MolSchema {
            symbols: vec!["O".into()],
            geometry: vec![0.0, 0.0],
        };
        let err = XyzModel::from_schema(&schema, Some("0.1.1"), &Options::new()).unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch { ref version, .. } if version == "0.1.1"));
    }

    #[test]
    fn file_round_trip_through_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.xyz");

        let model = XyzModel::new(water(), None).unwrap();
        model.to_file(&path, None, &Options::new()).unwrap();
        let back = XyzModel::from_file(&path, Some("XYZ"), &Options::new()).unwrap();

        assert_eq!(back.data(), model.data());
    }

    #[test]
    fn from_file_rejects_foreign_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.pdb");
        fs::write(&path, "ATOM").unwrap();

        let err = XyzModel::from_file(&path, Some("pdb"), &Options::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn module_of_strips_generics_and_item_name() {
        assert_eq!(module_of("alloc::vec::Vec<[f64; 3]>"), "alloc::vec");
        assert_eq!(module_of("f64"), "core");
        assert_eq!(crate_of("mmic_mda::models::UniverseModel"), "mmic_mda");
    }
}
