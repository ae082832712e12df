//! The pure-SVG 19x19 hex-quad template.
//!
//! Every grid cell is a fixed-width `<rect>` whose colour is selected by a
//! single hex class digit; the style block maps `q0`..`qf` to palette
//! entries 1..=16 and the pre-filled `qz` class to `fill:none`, so cells no
//! nibble maps onto stay transparent. Carries the Firefox crisp-edges CSS
//! fallback applied after generation.

use super::template19_bis::{XS_DIAGONAL, YS_DIAGONAL};
use crate::template::{CssFallback, HexQuadTemplate, Template};

const DATA: &str = r#"data:text/plain,{"name":"Mandala 0x0000000000000000000000000000000000000000","description":"A Unique Mandala","image":"data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' shape-rendering='crispEdges' width='512' height='512' viewBox='0 0 19 19' style='image-rendering: pixelated;'><style>.qz{fill:none}.q0{fill:%23f6fe63}.q1{fill:%23fec425}.q2{fill:%23f37734}.q3{fill:%23d01141}.q4{fill:%23450a2c}.q5{fill:%236d1b32}.q6{fill:%23c4754a}.q7{fill:%23e8caa9}.q8{fill:%236ef043}.q9{fill:%2307bf75}.qa{fill:%23005c99}.qb{fill:%230784aa}.qc{fill:%2330d1d1}.qd{fill:%234817a3}.qe{fill:%238034be}.qf{fill:%23b96ad8}</style><rect x='00' y='00' width='1' height='1' class='qz'/><rect x='01' y='00' width='1' height='1' class='qz'/><rect x='02' y='00' width='1' height='1' class='qz'/><rect x='03' y='00' width='1' height='1' class='qz'/><rect x='04' y='00' width='1' height='1' class='qz'/><rect x='05' y='00' width='1' height='1' class='qz'/><rect x='06' y='00' width='1' height='1' class='qz'/><rect x='07' y='00' width='1' height='1' class='qz'/><rect x='08' y='00' width='1' height='1' class='qz'/><rect x='09' y='00' width='1' height='1' class='qz'/><rect x='10' y='00' width='1' height='1' class='qz'/><rect x='11' y='00' width='1' height='1' class='qz'/><rect x='12' y='00' width='1' height='1' class='qz'/><rect x='13' y='00' width='1' height='1' class='qz'/><rect x='14' y='00' width='1' height='1' class='qz'/><rect x='15' y='00' width='1' height='1' class='qz'/><rect x='16' y='00' width='1' height='1' class='qz'/><rect x='17' y='00' width='1' height='1' class='qz'/><rect x='18' y='00' width='1' height='1' class='qz'/><rect x='00' y='01' width='1' height='1' class='qz'/><rect x='01' y='01' width='1' height='1' class='qz'/><rect x='02' y='01' width='1' height='1' class='qz'/><rect x='03' y='01' width='1' height='1' class='qz'/><rect x='04' y='01' width='1' height='1' class='qz'/><rect x='05' y='01' width='1' height='1' class='qz'/><rect x='06' y='01' width='1' height='1' class='qz'/><rect x='07' y='01' width='1' height='1' class='qz'/><rect x='08' y='01' width='1' height='1' class='qz'/><rect x='09' y='01' width='1' height='1' class='qz'/><rect x='10' y='01' width='1' height='1' class='qz'/><rect x='11' y='01' width='1' height='1' class='qz'/><rect x='12' y='01' width='1' height='1' class='qz'/><rect x='13' y='01' width='1' height='1' class='qz'/><rect x='14' y='01' width='1' height='1' class='qz'/><rect x='15' y='01' width='1' height='1' class='qz'/><rect x='16' y='01' width='1' height='1' class='qz'/><rect x='17' y='01' width='1' height='1' class='qz'/><rect x='18' y='01' width='1' height='1' class='qz'/><rect x='00' y='02' width='1' height='1' class='qz'/><rect x='01' y='02' width='1' height='1' class='qz'/><rect x='02' y='02' width='1' height='1' class='qz'/><rect x='03' y='02' width='1' height='1' class='qz'/><rect x='04' y='02' width='1' height='1' class='qz'/><rect x='05' y='02' width='1' height='1' class='qz'/><rect x='06' y='02' width='1' height='1' class='qz'/><rect x='07' y='02' width='1' height='1' class='qz'/><rect x='08' y='02' width='1' height='1' class='qz'/><rect x='09' y='02' width='1' height='1' class='qz'/><rect x='10' y='02' width='1' height='1' class='qz'/><rect x='11' y='02' width='1' height='1' class='qz'/><rect x='12' y='02' width='1' height='1' class='qz'/><rect x='13' y='02' width='1' height='1' class='qz'/><rect x='14' y='02' width='1' height='1' class='qz'/><rect x='15' y='02' width='1' height='1' class='qz'/><rect x='16' y='02' width='1' height='1' class='qz'/><rect x='17' y='02' width='1' height='1' class='qz'/><rect x='18' y='02' width='1' height='1' class='qz'/><rect x='00' y='03' width='1' height='1' class='qz'/><rect x='01' y='03' width='1' height='1' class='qz'/><rect x='02' y='03' width='1' height='1' class='qz'/><rect x='03' y='03' width='1' height='1' class='qz'/><rect x='04' y='03' width='1' height='1' class='qz'/><rect x='05' y='03' width='1' height='1' class='qz'/><rect x='06' y='03' width='1' height='1' class='qz'/><rect x='07' y='03' width='1' height='1' class='qz'/><rect x='08' y='03' width='1' height='1' class='qz'/><rect x='09' y='03' width='1' height='1' class='qz'/><rect x='10' y='03' width='1' height='1' class='qz'/><rect x='11' y='03' width='1' height='1' class='qz'/><rect x='12' y='03' width='1' height='1' class='qz'/><rect x='13' y='03' width='1' height='1' class='qz'/><rect x='14' y='03' width='1' height='1' class='qz'/><rect x='15' y='03' width='1' height='1' class='qz'/><rect x='16' y='03' width='1' height='1' class='qz'/><rect x='17' y='03' width='1' height='1' class='qz'/><rect x='18' y='03' width='1' height='1' class='qz'/><rect x='00' y='04' width='1' height='1' class='qz'/><rect x='01' y='04' width='1' height='1' class='qz'/><rect x='02' y='04' width='1' height='1' class='qz'/><rect x='03' y='04' width='1' height='1' class='qz'/><rect x='04' y='04' width='1' height='1' class='qz'/><rect x='05' y='04' width='1' height='1' class='qz'/><rect x='06' y='04' width='1' height='1' class='qz'/><rect x='07' y='04' width='1' height='1' class='qz'/><rect x='08' y='04' width='1' height='1' class='qz'/><rect x='09' y='04' width='1' height='1' class='qz'/><rect x='10' y='04' width='1' height='1' class='qz'/><rect x='11' y='04' width='1' height='1' class='qz'/><rect x='12' y='04' width='1' height='1' class='qz'/><rect x='13' y='04' width='1' height='1' class='qz'/><rect x='14' y='04' width='1' height='1' class='qz'/><rect x='15' y='04' width='1' height='1' class='qz'/><rect x='16' y='04' width='1' height='1' class='qz'/><rect x='17' y='04' width='1' height='1' class='qz'/><rect x='18' y='04' width='1' height='1' class='qz'/><rect x='00' y='05' width='1' height='1' class='qz'/><rect x='01' y='05' width='1' height='1' class='qz'/><rect x='02' y='05' width='1' height='1' class='qz'/><rect x='03' y='05' width='1' height='1' class='qz'/><rect x='04' y='05' width='1' height='1' class='qz'/><rect x='05' y='05' width='1' height='1' class='qz'/><rect x='06' y='05' width='1' height='1' class='qz'/><rect x='07' y='05' width='1' height='1' class='qz'/><rect x='08' y='05' width='1' height='1' class='qz'/><rect x='09' y='05' width='1' height='1' class='qz'/><rect x='10' y='05' width='1' height='1' class='qz'/><rect x='11' y='05' width='1' height='1' class='qz'/><rect x='12' y='05' width='1' height='1' class='qz'/><rect x='13' y='05' width='1' height='1' class='qz'/><rect x='14' y='05' width='1' height='1' class='qz'/><rect x='15' y='05' width='1' height='1' class='qz'/><rect x='16' y='05' width='1' height='1' class='qz'/><rect x='17' y='05' width='1' height='1' class='qz'/><rect x='18' y='05' width='1' height='1' class='qz'/><rect x='00' y='06' width='1' height='1' class='qz'/><rect x='01' y='06' width='1' height='1' class='qz'/><rect x='02' y='06' width='1' height='1' class='qz'/><rect x='03' y='06' width='1' height='1' class='qz'/><rect x='04' y='06' width='1' height='1' class='qz'/><rect x='05' y='06' width='1' height='1' class='qz'/><rect x='06' y='06' width='1' height='1' class='qz'/><rect x='07' y='06' width='1' height='1' class='qz'/><rect x='08' y='06' width='1' height='1' class='qz'/><rect x='09' y='06' width='1' height='1' class='qz'/><rect x='10' y='06' width='1' height='1' class='qz'/><rect x='11' y='06' width='1' height='1' class='qz'/><rect x='12' y='06' width='1' height='1' class='qz'/><rect x='13' y='06' width='1' height='1' class='qz'/><rect x='14' y='06' width='1' height='1' class='qz'/><rect x='15' y='06' width='1' height='1' class='qz'/><rect x='16' y='06' width='1' height='1' class='qz'/><rect x='17' y='06' width='1' height='1' class='qz'/><rect x='18' y='06' width='1' height='1' class='qz'/><rect x='00' y='07' width='1' height='1' class='qz'/><rect x='01' y='07' width='1' height='1' class='qz'/><rect x='02' y='07' width='1' height='1' class='qz'/><rect x='03' y='07' width='1' height='1' class='qz'/><rect x='04' y='07' width='1' height='1' class='qz'/><rect x='05' y='07' width='1' height='1' class='qz'/><rect x='06' y='07' width='1' height='1' class='qz'/><rect x='07' y='07' width='1' height='1' class='qz'/><rect x='08' y='07' width='1' height='1' class='qz'/><rect x='09' y='07' width='1' height='1' class='qz'/><rect x='10' y='07' width='1' height='1' class='qz'/><rect x='11' y='07' width='1' height='1' class='qz'/><rect x='12' y='07' width='1' height='1' class='qz'/><rect x='13' y='07' width='1' height='1' class='qz'/><rect x='14' y='07' width='1' height='1' class='qz'/><rect x='15' y='07' width='1' height='1' class='qz'/><rect x='16' y='07' width='1' height='1' class='qz'/><rect x='17' y='07' width='1' height='1' class='qz'/><rect x='18' y='07' width='1' height='1' class='qz'/><rect x='00' y='08' width='1' height='1' class='qz'/><rect x='01' y='08' width='1' height='1' class='qz'/><rect x='02' y='08' width='1' height='1' class='qz'/><rect x='03' y='08' width='1' height='1' class='qz'/><rect x='04' y='08' width='1' height='1' class='qz'/><rect x='05' y='08' width='1' height='1' class='qz'/><rect x='06' y='08' width='1' height='1' class='qz'/><rect x='07' y='08' width='1' height='1' class='qz'/><rect x='08' y='08' width='1' height='1' class='qz'/><rect x='09' y='08' width='1' height='1' class='qz'/><rect x='10' y='08' width='1' height='1' class='qz'/><rect x='11' y='08' width='1' height='1' class='qz'/><rect x='12' y='08' width='1' height='1' class='qz'/><rect x='13' y='08' width='1' height='1' class='qz'/><rect x='14' y='08' width='1' height='1' class='qz'/><rect x='15' y='08' width='1' height='1' class='qz'/><rect x='16' y='08' width='1' height='1' class='qz'/><rect x='17' y='08' width='1' height='1' class='qz'/><rect x='18' y='08' width='1' height='1' class='qz'/><rect x='00' y='09' width='1' height='1' class='qz'/><rect x='01' y='09' width='1' height='1' class='qz'/><rect x='02' y='09' width='1' height='1' class='qz'/><rect x='03' y='09' width='1' height='1' class='qz'/><rect x='04' y='09' width='1' height='1' class='qz'/><rect x='05' y='09' width='1' height='1' class='qz'/><rect x='06' y='09' width='1' height='1' class='qz'/><rect x='07' y='09' width='1' height='1' class='qz'/><rect x='08' y='09' width='1' height='1' class='qz'/><rect x='09' y='09' width='1' height='1' class='qz'/><rect x='10' y='09' width='1' height='1' class='qz'/><rect x='11' y='09' width='1' height='1' class='qz'/><rect x='12' y='09' width='1' height='1' class='qz'/><rect x='13' y='09' width='1' height='1' class='qz'/><rect x='14' y='09' width='1' height='1' class='qz'/><rect x='15' y='09' width='1' height='1' class='qz'/><rect x='16' y='09' width='1' height='1' class='qz'/><rect x='17' y='09' width='1' height='1' class='qz'/><rect x='18' y='09' width='1' height='1' class='qz'/><rect x='00' y='10' width='1' height='1' class='qz'/><rect x='01' y='10' width='1' height='1' class='qz'/><rect x='02' y='10' width='1' height='1' class='qz'/><rect x='03' y='10' width='1' height='1' class='qz'/><rect x='04' y='10' width='1' height='1' class='qz'/><rect x='05' y='10' width='1' height='1' class='qz'/><rect x='06' y='10' width='1' height='1' class='qz'/><rect x='07' y='10' width='1' height='1' class='qz'/><rect x='08' y='10' width='1' height='1' class='qz'/><rect x='09' y='10' width='1' height='1' class='qz'/><rect x='10' y='10' width='1' height='1' class='qz'/><rect x='11' y='10' width='1' height='1' class='qz'/><rect x='12' y='10' width='1' height='1' class='qz'/><rect x='13' y='10' width='1' height='1' class='qz'/><rect x='14' y='10' width='1' height='1' class='qz'/><rect x='15' y='10' width='1' height='1' class='qz'/><rect x='16' y='10' width='1' height='1' class='qz'/><rect x='17' y='10' width='1' height='1' class='qz'/><rect x='18' y='10' width='1' height='1' class='qz'/><rect x='00' y='11' width='1' height='1' class='qz'/><rect x='01' y='11' width='1' height='1' class='qz'/><rect x='02' y='11' width='1' height='1' class='qz'/><rect x='03' y='11' width='1' height='1' class='qz'/><rect x='04' y='11' width='1' height='1' class='qz'/><rect x='05' y='11' width='1' height='1' class='qz'/><rect x='06' y='11' width='1' height='1' class='qz'/><rect x='07' y='11' width='1' height='1' class='qz'/><rect x='08' y='11' width='1' height='1' class='qz'/><rect x='09' y='11' width='1' height='1' class='qz'/><rect x='10' y='11' width='1' height='1' class='qz'/><rect x='11' y='11' width='1' height='1' class='qz'/><rect x='12' y='11' width='1' height='1' class='qz'/><rect x='13' y='11' width='1' height='1' class='qz'/><rect x='14' y='11' width='1' height='1' class='qz'/><rect x='15' y='11' width='1' height='1' class='qz'/><rect x='16' y='11' width='1' height='1' class='qz'/><rect x='17' y='11' width='1' height='1' class='qz'/><rect x='18' y='11' width='1' height='1' class='qz'/><rect x='00' y='12' width='1' height='1' class='qz'/><rect x='01' y='12' width='1' height='1' class='qz'/><rect x='02' y='12' width='1' height='1' class='qz'/><rect x='03' y='12' width='1' height='1' class='qz'/><rect x='04' y='12' width='1' height='1' class='qz'/><rect x='05' y='12' width='1' height='1' class='qz'/><rect x='06' y='12' width='1' height='1' class='qz'/><rect x='07' y='12' width='1' height='1' class='qz'/><rect x='08' y='12' width='1' height='1' class='qz'/><rect x='09' y='12' width='1' height='1' class='qz'/><rect x='10' y='12' width='1' height='1' class='qz'/><rect x='11' y='12' width='1' height='1' class='qz'/><rect x='12' y='12' width='1' height='1' class='qz'/><rect x='13' y='12' width='1' height='1' class='qz'/><rect x='14' y='12' width='1' height='1' class='qz'/><rect x='15' y='12' width='1' height='1' class='qz'/><rect x='16' y='12' width='1' height='1' class='qz'/><rect x='17' y='12' width='1' height='1' class='qz'/><rect x='18' y='12' width='1' height='1' class='qz'/><rect x='00' y='13' width='1' height='1' class='qz'/><rect x='01' y='13' width='1' height='1' class='qz'/><rect x='02' y='13' width='1' height='1' class='qz'/><rect x='03' y='13' width='1' height='1' class='qz'/><rect x='04' y='13' width='1' height='1' class='qz'/><rect x='05' y='13' width='1' height='1' class='qz'/><rect x='06' y='13' width='1' height='1' class='qz'/><rect x='07' y='13' width='1' height='1' class='qz'/><rect x='08' y='13' width='1' height='1' class='qz'/><rect x='09' y='13' width='1' height='1' class='qz'/><rect x='10' y='13' width='1' height='1' class='qz'/><rect x='11' y='13' width='1' height='1' class='qz'/><rect x='12' y='13' width='1' height='1' class='qz'/><rect x='13' y='13' width='1' height='1' class='qz'/><rect x='14' y='13' width='1' height='1' class='qz'/><rect x='15' y='13' width='1' height='1' class='qz'/><rect x='16' y='13' width='1' height='1' class='qz'/><rect x='17' y='13' width='1' height='1' class='qz'/><rect x='18' y='13' width='1' height='1' class='qz'/><rect x='00' y='14' width='1' height='1' class='qz'/><rect x='01' y='14' width='1' height='1' class='qz'/><rect x='02' y='14' width='1' height='1' class='qz'/><rect x='03' y='14' width='1' height='1' class='qz'/><rect x='04' y='14' width='1' height='1' class='qz'/><rect x='05' y='14' width='1' height='1' class='qz'/><rect x='06' y='14' width='1' height='1' class='qz'/><rect x='07' y='14' width='1' height='1' class='qz'/><rect x='08' y='14' width='1' height='1' class='qz'/><rect x='09' y='14' width='1' height='1' class='qz'/><rect x='10' y='14' width='1' height='1' class='qz'/><rect x='11' y='14' width='1' height='1' class='qz'/><rect x='12' y='14' width='1' height='1' class='qz'/><rect x='13' y='14' width='1' height='1' class='qz'/><rect x='14' y='14' width='1' height='1' class='qz'/><rect x='15' y='14' width='1' height='1' class='qz'/><rect x='16' y='14' width='1' height='1' class='qz'/><rect x='17' y='14' width='1' height='1' class='qz'/><rect x='18' y='14' width='1' height='1' class='qz'/><rect x='00' y='15' width='1' height='1' class='qz'/><rect x='01' y='15' width='1' height='1' class='qz'/><rect x='02' y='15' width='1' height='1' class='qz'/><rect x='03' y='15' width='1' height='1' class='qz'/><rect x='04' y='15' width='1' height='1' class='qz'/><rect x='05' y='15' width='1' height='1' class='qz'/><rect x='06' y='15' width='1' height='1' class='qz'/><rect x='07' y='15' width='1' height='1' class='qz'/><rect x='08' y='15' width='1' height='1' class='qz'/><rect x='09' y='15' width='1' height='1' class='qz'/><rect x='10' y='15' width='1' height='1' class='qz'/><rect x='11' y='15' width='1' height='1' class='qz'/><rect x='12' y='15' width='1' height='1' class='qz'/><rect x='13' y='15' width='1' height='1' class='qz'/><rect x='14' y='15' width='1' height='1' class='qz'/><rect x='15' y='15' width='1' height='1' class='qz'/><rect x='16' y='15' width='1' height='1' class='qz'/><rect x='17' y='15' width='1' height='1' class='qz'/><rect x='18' y='15' width='1' height='1' class='qz'/><rect x='00' y='16' width='1' height='1' class='qz'/><rect x='01' y='16' width='1' height='1' class='qz'/><rect x='02' y='16' width='1' height='1' class='qz'/><rect x='03' y='16' width='1' height='1' class='qz'/><rect x='04' y='16' width='1' height='1' class='qz'/><rect x='05' y='16' width='1' height='1' class='qz'/><rect x='06' y='16' width='1' height='1' class='qz'/><rect x='07' y='16' width='1' height='1' class='qz'/><rect x='08' y='16' width='1' height='1' class='qz'/><rect x='09' y='16' width='1' height='1' class='qz'/><rect x='10' y='16' width='1' height='1' class='qz'/><rect x='11' y='16' width='1' height='1' class='qz'/><rect x='12' y='16' width='1' height='1' class='qz'/><rect x='13' y='16' width='1' height='1' class='qz'/><rect x='14' y='16' width='1' height='1' class='qz'/><rect x='15' y='16' width='1' height='1' class='qz'/><rect x='16' y='16' width='1' height='1' class='qz'/><rect x='17' y='16' width='1' height='1' class='qz'/><rect x='18' y='16' width='1' height='1' class='qz'/><rect x='00' y='17' width='1' height='1' class='qz'/><rect x='01' y='17' width='1' height='1' class='qz'/><rect x='02' y='17' width='1' height='1' class='qz'/><rect x='03' y='17' width='1' height='1' class='qz'/><rect x='04' y='17' width='1' height='1' class='qz'/><rect x='05' y='17' width='1' height='1' class='qz'/><rect x='06' y='17' width='1' height='1' class='qz'/><rect x='07' y='17' width='1' height='1' class='qz'/><rect x='08' y='17' width='1' height='1' class='qz'/><rect x='09' y='17' width='1' height='1' class='qz'/><rect x='10' y='17' width='1' height='1' class='qz'/><rect x='11' y='17' width='1' height='1' class='qz'/><rect x='12' y='17' width='1' height='1' class='qz'/><rect x='13' y='17' width='1' height='1' class='qz'/><rect x='14' y='17' width='1' height='1' class='qz'/><rect x='15' y='17' width='1' height='1' class='qz'/><rect x='16' y='17' width='1' height='1' class='qz'/><rect x='17' y='17' width='1' height='1' class='qz'/><rect x='18' y='17' width='1' height='1' class='qz'/><rect x='00' y='18' width='1' height='1' class='qz'/><rect x='01' y='18' width='1' height='1' class='qz'/><rect x='02' y='18' width='1' height='1' class='qz'/><rect x='03' y='18' width='1' height='1' class='qz'/><rect x='04' y='18' width='1' height='1' class='qz'/><rect x='05' y='18' width='1' height='1' class='qz'/><rect x='06' y='18' width='1' height='1' class='qz'/><rect x='07' y='18' width='1' height='1' class='qz'/><rect x='08' y='18' width='1' height='1' class='qz'/><rect x='09' y='18' width='1' height='1' class='qz'/><rect x='10' y='18' width='1' height='1' class='qz'/><rect x='11' y='18' width='1' height='1' class='qz'/><rect x='12' y='18' width='1' height='1' class='qz'/><rect x='13' y='18' width='1' height='1' class='qz'/><rect x='14' y='18' width='1' height='1' class='qz'/><rect x='15' y='18' width='1' height='1' class='qz'/><rect x='16' y='18' width='1' height='1' class='qz'/><rect x='17' y='18' width='1' height='1' class='qz'/><rect x='18' y='18' width='1' height='1' class='qz'/></svg>"}"#;

pub const TEMPLATE19_SVG: Template = Template::HexQuad(HexQuadTemplate {
    data: DATA,
    quad_base_pos: 670,
    quad_stride: 53,
    address_data_pos: 74,
    width: 19,
    height: 19,
    xs: &XS_DIAGONAL,
    ys: &YS_DIAGONAL,
    css_fallback: Some(CssFallback {
        from: "style='image-rendering: pixelated;'",
        to: "style='image-rendering: pixelated; image-rendering: -moz-crisp-edges;'",
    }),
});
