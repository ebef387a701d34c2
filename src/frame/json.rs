use super::*;
use crate::Value;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as Json;

/// JSON document form of a [`Frame`]. Missing cells are `null`,
/// categorical cells are given by label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDoc {
    pub name: String,
    pub columns: Vec<ColumnDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDoc {
    pub name: String,
    pub kind: Kind,
    pub values: Vec<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<String>>,
}

impl TryFrom<ColumnDoc> for Column {
    type Error = anyhow::Error;
    fn try_from(doc: ColumnDoc) -> Result<Self, Self::Error> {
        match doc.kind {
            Kind::Categorical => {
                let labels = doc
                    .values
                    .iter()
                    .map(|v| match v {
                        Json::Null => Ok(None),
                        Json::String(s) => Ok(Some(s.as_str())),
                        other => Err(anyhow::anyhow!("column {} expects labels, got {}", doc.name, other)),
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                match doc.domain.clone() {
                    None => Ok(Column::labels(&doc.name, &labels)),
                    Some(domain) => {
                        let codes = labels
                            .iter()
                            .map(|l| match l {
                                None => Ok(Value::NAN),
                                Some(l) => domain
                                    .iter()
                                    .position(|d| d.as_str() == *l)
                                    .map(|i| i as Value)
                                    .ok_or_else(|| anyhow::anyhow!("label {:?} not in domain of {}", l, doc.name)),
                            })
                            .collect::<anyhow::Result<Vec<_>>>()?;
                        Ok(Column::categorical(&doc.name, domain, codes))
                    }
                }
            }
            kind => {
                let data = doc
                    .values
                    .iter()
                    .map(|v| match v {
                        Json::Null => Ok(Value::NAN),
                        Json::Number(n) => n
                            .as_f64()
                            .ok_or_else(|| anyhow::anyhow!("column {} has unrepresentable {}", doc.name, n)),
                        other => Err(anyhow::anyhow!("column {} expects numbers, got {}", doc.name, other)),
                    })
                    .collect::<anyhow::Result<Vec<Value>>>()?;
                match kind {
                    Kind::Integer if data.iter().any(|v| !v.is_nan() && v.fract() != 0.0) => {
                        Err(anyhow::anyhow!("column {} expects integers", doc.name))
                    }
                    Kind::Integer => Ok(Column::integer(&doc.name, data)),
                    _ => Ok(Column::real(&doc.name, data)),
                }
            }
        }
    }
}

impl From<&Column> for ColumnDoc {
    fn from(column: &Column) -> Self {
        let values = (0..column.len())
            .map(|r| match (column.is_na(r), column.kind()) {
                (true, _) => Json::Null,
                (false, Kind::Categorical) => column.label(r).map_or(Json::Null, Json::from),
                (false, _) => serde_json::Number::from_f64(column.at(r)).map_or(Json::Null, Json::Number),
            })
            .collect();
        Self {
            name: column.name().to_string(),
            kind: column.kind(),
            values,
            domain: column.domain().map(<[String]>::to_vec),
        }
    }
}

impl TryFrom<FrameDoc> for Frame {
    type Error = anyhow::Error;
    fn try_from(doc: FrameDoc) -> Result<Self, Self::Error> {
        let columns = doc
            .columns
            .into_iter()
            .map(Column::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        match columns.windows(2).all(|w| w[0].len() == w[1].len()) {
            true => Ok(Frame::new(doc.name, columns)),
            false => Err(anyhow::anyhow!("columns of {} differ in length", doc.name)),
        }
    }
}

impl From<&Frame> for FrameDoc {
    fn from(frame: &Frame) -> Self {
        Self {
            name: frame.key().to_string(),
            columns: frame.columns().iter().map(ColumnDoc::from).collect(),
        }
    }
}

impl TryFrom<&str> for Frame {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Frame::try_from(serde_json::from_str::<FrameDoc>(json)?)
    }
}

impl Frame {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&FrameDoc::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "name": "train",
        "columns": [
            { "name": "store", "kind": "categorical", "values": ["b", "a", null] },
            { "name": "id",    "kind": "integer",     "values": [1, null, 3] },
            { "name": "y",     "kind": "real",        "values": [0.5, 1.5, 2.5] }
        ]
    }"#;

    #[test]
    fn parse_document() {
        let frame = Frame::try_from(DOC).unwrap();
        assert_eq!(frame.key().as_str(), "train");
        assert_eq!(frame.names(), vec!["store", "id", "y"]);
        let store = frame.vec("store").unwrap();
        assert_eq!(store.domain(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(store.label(0), Some("b"));
        assert!(store.is_na(2));
        assert!(frame.vec("id").unwrap().is_na(1));
    }

    #[test]
    fn document_survives_reload() {
        let frame = Frame::try_from(DOC).unwrap();
        let again = Frame::try_from(frame.to_json().unwrap().as_str()).unwrap();
        assert_eq!(again.names(), frame.names());
        assert_eq!(again.vec("store").unwrap().label(1), Some("a"));
        assert!(again.vec("store").unwrap().is_na(2));
        assert_eq!(again.vec("y").unwrap().values(), frame.vec("y").unwrap().values());
    }

    #[test]
    fn reject_bad_documents() {
        let fractional = r#"{"name":"f","columns":[{"name":"i","kind":"integer","values":[1.5]}]}"#;
        let ragged = r#"{"name":"f","columns":[
            {"name":"a","kind":"real","values":[1]},
            {"name":"b","kind":"real","values":[1,2]}]}"#;
        let unknown = r#"{"name":"f","columns":[
            {"name":"c","kind":"categorical","values":["z"],"domain":["a"]}]}"#;
        assert!(Frame::try_from(fractional).is_err());
        assert!(Frame::try_from(ragged).is_err());
        assert!(Frame::try_from(unknown).is_err());
    }
}
